//! facetcut CLI
//!
//! Command-line interface for diamond facet reconciliation

use clap::{Parser, Subcommand, ValueEnum};
use facetcut_core::logging_facility::{self, Profile};
use facetcut_core::FacetCutError;
use std::process::ExitCode;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "facetcut")]
#[command(about = "facetcut - compute diamond cuts between facet lists", long_about = None)]
struct Cli {
    /// Log output format (written to stderr)
    #[arg(long, value_enum, global = true, default_value = "dev")]
    log: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable
    Dev,
    /// JSON lines
    Prod,
    /// No log output
    Quiet,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Dev => Profile::Development,
            LogFormat::Prod => Profile::Production,
            LogFormat::Quiet => Profile::Test,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the diamond cut from current to model facets
    Diff(commands::diff::DiffArgs),
    /// Check whether two facet lists route every selector identically
    Equals(commands::equals::EqualsArgs),
    /// Apply a diamond cut to a facet list and print the result
    Apply(commands::apply::ApplyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging_facility::init(cli.log.into());

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Equals(args) => commands::equals::execute(args),
        Commands::Apply(args) => commands::apply::execute(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<FacetCutError>() {
                Some(FacetCutError::Validation { errors }) => {
                    eprintln!("Error: {}", e);
                    match serde_json::to_string_pretty(errors) {
                        Ok(json) => eprintln!("{}", json),
                        Err(_) => errors.iter().for_each(|err| eprintln!("  {}", err)),
                    }
                }
                _ => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
