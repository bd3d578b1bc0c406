//! Palette command: list the dye colors every variant is generated for.

use crate::cli::common::{CliError, CliResult, GlobalOptions};
use crate::models::{DyeColor, PALETTE};
use clap::Args;
use serde::Serialize;

/// List the sixteen palette colors
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {}

/// One palette entry for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct PaletteEntry {
    /// Color label
    pub color: DyeColor,
    /// Dye tint as `#RRGGBB`
    pub tint: String,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self, options: &GlobalOptions) -> CliResult<()> {
        let entries: Vec<_> = PALETTE
            .iter()
            .map(|&color| PaletteEntry {
                color,
                tint: color.tint_hex(),
            })
            .collect();

        if options.json {
            println!(
                "{}",
                serde_json::to_string(&entries)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for entry in entries {
                println!("  {:<12} {}", entry.color.label(), entry.tint);
            }
        }

        Ok(())
    }
}
