//! CLI command handlers.
//!
//! Each subcommand owns a clap `Args` struct with an `execute` method that
//! returns a [`CliResult`]; `main` maps failures to [`ExitCode`]s.

pub mod cable;
pub mod common;
pub mod expand;
pub mod palette;
pub mod wire;

// Re-export types used by main.rs and tests
pub use cable::CableArgs;
pub use common::{CliError, CliResult, ExitCode, GlobalOptions};
pub use expand::ExpandArgs;
pub use palette::PaletteArgs;
pub use wire::WireArgs;
