mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::relocation::{EvaluateArgs, SensitivityArgs, StatusArgs};

/// India vs UAE tax-residency and relocation cost calculator
#[derive(Parser)]
#[command(
    name = "resi",
    version,
    about = "India vs UAE tax-residency and relocation cost calculator",
    long_about = "Estimates tax-residency status and relocation cost breakeven for an \
                  individual splitting the year between the UAE and India. Computes the \
                  incremental cost of the move, the breakeven annual income, day-count \
                  residency classifications, and an income sensitivity table."
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
    /// Validate inputs and, when valid, run the full calculation
    Evaluate(EvaluateArgs),
    /// Check inputs only; prints the field-keyed error map
    Validate(EvaluateArgs),
    /// Classify residency status from day counts alone
    Status(StatusArgs),
    /// Build a standalone income sensitivity table
    Sensitivity(SensitivityArgs),
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
        Commands::Evaluate(args) => commands::relocation::run_evaluate(args),
        Commands::Validate(args) => commands::relocation::run_validate(args),
        Commands::Status(args) => commands::relocation::run_status(args),
        Commands::Sensitivity(args) => commands::relocation::run_sensitivity(args),
        Commands::Version => {
            println!("resi {}", env!("CARGO_PKG_VERSION"));
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
