mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::export::ExportArgs;
use commands::maturity::MaturityArgs;

/// After-tax maturity calculations for fixed-rate cumulative bonds
#[derive(Parser)]
#[command(
    name = "bnr",
    version,
    about = "After-tax maturity calculations for fixed-rate cumulative bonds",
    long_about = "Computes gross and net maturity value, tax on the gain, net gain \
                  percentage, and annualized (CAGR) return for a cumulative bond \
                  with decimal precision. Parameters come from flags, a JSON file, \
                  or piped stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute gross/net maturity and after-tax returns
    Maturity(MaturityArgs),
    /// Export a calculation as a clipboard JSON payload or a CSV file
    Export(ExportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Maturity(args) => commands::maturity::run_maturity(args),
        Commands::Export(args) => {
            // Export writes its own artefacts; nothing to format on success.
            match commands::export::run_export(args) {
                Ok(()) => {
                    process::exit(0);
                }
                Err(e) => Err(e),
            }
        }
        Commands::Version => {
            println!("bnr {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
