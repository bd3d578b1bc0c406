//! Kontrol Asset Generator - colored asset variants from templates
//!
//! Run from the project root or from its `dev/` directory. Templates are read
//! from `dev/` and written into `src/main/resources`.

use clap::{Parser, Subcommand};
use kontrol_autogen::cli::{
    CableArgs, ExitCode, ExpandArgs, GlobalOptions, PaletteArgs, WireArgs,
};
use kontrol_autogen::constants::APP_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Kontrol Asset Generator - colored asset variants from templates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate every colored variant of a wire
    Wire(WireArgs),
    /// Assemble a cable from model parts and templates
    Cable(CableArgs),
    /// Expand an arbitrary template into colored variants
    Expand(ExpandArgs),
    /// List the palette colors
    Palette(PaletteArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Wire(args) => args.execute(&cli.options),
        Command::Cable(args) => args.execute(&cli.options),
        Command::Expand(args) => args.execute(&cli.options),
        Command::Palette(args) => args.execute(&cli.options),
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            std::process::exit(e.code.code());
        }
    }
}
