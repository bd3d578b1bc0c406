//! Cable command: model parts, blockstates and item models for one cable.

use crate::cli::common::{generation_error, CliError, CliResult, GlobalOptions};
use crate::generator::create_cable;
use crate::models::CableSpec;
use clap::Args;
use std::path::PathBuf;

/// Assemble a cable from its model parts and the cable templates
#[derive(Debug, Clone, Args)]
pub struct CableArgs {
    /// Cable identifier without namespace (e.g. basic_cable)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Half of the cable width in model units
    #[arg(long, value_name = "SIZE")]
    pub size: f64,

    /// Directory holding middle.json and connector.json (relative to the dev directory)
    #[arg(long, value_name = "DIR")]
    pub model_dir: PathBuf,
}

impl CableArgs {
    /// Execute the cable command
    pub fn execute(&self, options: &GlobalOptions) -> CliResult<()> {
        let mut cable = CableSpec::new(&self.name, &self.model_dir, self.size);
        cable
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let layout = options.layout()?;
        cable.model_dir = layout.dev_dir.join(&self.model_dir);

        let report = create_cable(&options.expander(), &layout, &cable)
            .map_err(|e| generation_error(&e))?;
        options.print_report(&report)
    }
}
