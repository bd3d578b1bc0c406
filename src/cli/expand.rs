//! Expand command: direct access to the per-color template expander.

use crate::cli::common::{generation_error, CliError, CliResult, GlobalOptions};
use crate::generator::Substitutions;
use clap::Args;
use std::path::PathBuf;

/// Expand any template into sixteen colored files
#[derive(Debug, Clone, Args)]
pub struct ExpandArgs {
    /// Template file (relative to the dev directory)
    #[arg(short, long, value_name = "FILE")]
    pub template: PathBuf,

    /// Output directory (relative to the dev directory)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Base name; files are written as `<color>_<NAME>.json`
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Extra replacement applied after color substitution (repeatable)
    #[arg(long = "set", value_name = "TOKEN=VALUE")]
    pub substitutions: Vec<String>,
}

impl ExpandArgs {
    /// Execute the expand command
    pub fn execute(&self, options: &GlobalOptions) -> CliResult<()> {
        if self.name.is_empty() {
            return Err(CliError::validation("Name must not be empty"));
        }

        let mut subs = Substitutions::new();
        for pair in &self.substitutions {
            let (token, value) =
                Substitutions::parse_pair(pair).map_err(|e| CliError::validation(e.to_string()))?;
            subs.insert(token, value);
        }

        let layout = options.layout()?;
        let template = layout.dev_dir.join(&self.template);
        let out_dir = layout.dev_dir.join(&self.out_dir);

        let report = options
            .expander()
            .expand_with(&template, &out_dir, &self.name, |text| subs.apply(text))
            .map_err(|e| generation_error(&e))?;
        options.print_report(&report)
    }
}
