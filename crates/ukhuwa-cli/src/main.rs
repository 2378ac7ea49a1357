//! # ukhuwa CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ukhuwa_cli::code::{run_code, CodeArgs};
use ukhuwa_cli::mrz::{run_mrz, MrzArgs};

/// Ukhuwa platform tooling
///
/// Document-intake MRZ parsing and unique code minting for user accounts
/// and case records.
#[derive(Parser, Debug)]
#[command(name = "ukhuwa", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a TD3 machine-readable zone into identity fields.
    Mrz(MrzArgs),

    /// Mint and check human-shareable codes.
    Code(CodeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Mrz(args) => run_mrz(&args),
        Commands::Code(args) => run_code(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
