//! Wire command: colored variants of every resource category.

use crate::cli::common::{generation_error, CliError, CliResult, GlobalOptions};
use crate::generator::generate_wire;
use clap::Args;

/// Generate blockstate, item model, recipe and loot table variants of a wire
#[derive(Debug, Clone, Args)]
pub struct WireArgs {
    /// Wire identifier without namespace; templates are `<category>/<NAME>.json`
    #[arg(value_name = "NAME", default_value = "basic_wire")]
    pub name: String,
}

impl WireArgs {
    /// Execute the wire command
    pub fn execute(&self, options: &GlobalOptions) -> CliResult<()> {
        if self.name.is_empty() {
            return Err(CliError::validation("Wire name must not be empty"));
        }

        let layout = options.layout()?;
        let report = generate_wire(&options.expander(), &layout, &self.name)
            .map_err(|e| generation_error(&e))?;
        options.print_report(&report)
    }
}
