//! Shared CLI plumbing: error type, exit codes, global options and report output.

use crate::config::Config;
use crate::generator::TemplateExpander;
use crate::models::GenerationReport;
use crate::workspace::{resolve_dev_dir, AssetLayout};
use clap::Args;
use std::fmt;
use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Everything was generated
    Success = 0,
    /// Bad arguments or configuration
    ValidationError = 1,
    /// Missing input, missing dev directory or unwritable output
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug)]
pub struct CliError {
    /// Human-readable message
    pub message: String,
    /// Exit code to terminate with
    pub code: ExitCode,
}

impl CliError {
    /// Invalid input or configuration.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::ValidationError,
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Options shared by every generating command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Dev directory (defaults to the current directory if named `dev`, else `./dev`)
    #[arg(long, value_name = "PATH", global = true)]
    pub dev_dir: Option<PathBuf>,

    /// Override the mod namespace from autogen.toml
    #[arg(long, value_name = "NS", global = true)]
    pub namespace: Option<String>,

    /// Report what would be written without touching any file
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Resolves the dev directory and configuration into an asset layout.
    pub fn layout(&self) -> CliResult<AssetLayout> {
        let dev_dir = match &self.dev_dir {
            Some(path) => {
                if !path.is_dir() {
                    return Err(CliError::io(format!(
                        "Dev directory not found: {}",
                        path.display()
                    )));
                }
                path.clone()
            }
            None => {
                let cwd = std::env::current_dir().map_err(|e| {
                    CliError::io(format!("Failed to read current directory: {e}"))
                })?;
                resolve_dev_dir(&cwd).map_err(|e| CliError::io(format!("{e:#}")))?
            }
        };

        let mut config = Config::load(&dev_dir)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(namespace) = &self.namespace {
            config
                .set_namespace(namespace.clone())
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        Ok(AssetLayout::new(dev_dir, &config))
    }

    /// Expander honouring `--dry-run`.
    #[must_use]
    pub fn expander(&self) -> TemplateExpander {
        if self.dry_run {
            TemplateExpander::dry_run()
        } else {
            TemplateExpander::new()
        }
    }

    /// Prints a generation report as JSON or as a short summary.
    pub fn print_report(&self, report: &GenerationReport) -> CliResult<()> {
        if self.json {
            println!(
                "{}",
                serde_json::to_string(report)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        let verb = if report.dry_run { "Would write" } else { "Wrote" };
        println!("✓ {verb} {} files", report.file_count());
        for path in &report.written {
            println!("  {}", path.display());
        }

        if !report.unresolved.is_empty() {
            println!();
            println!("Unresolved placeholders ({}):", report.unresolved.len());
            for entry in &report.unresolved {
                println!("  {} in {}", entry.token, entry.file.display());
            }
        }

        Ok(())
    }
}

/// Maps a generator failure to a CLI error, keeping the full context chain.
pub fn generation_error(err: &anyhow::Error) -> CliError {
    CliError::io(format!("{err:#}"))
}
