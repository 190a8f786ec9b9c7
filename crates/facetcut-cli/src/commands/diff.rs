//! Diff command
//!
//! Usage: facetcut diff --current <FILE> --model <FILE> [--output <FILE>]

use clap::Args;
use facetcut_core::{ensure_diamond_facets, Facet};
use std::path::PathBuf;
use std::process::ExitCode;

use super::{read_json, write_json};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// JSON facet list currently deployed (loupe `facets()` output)
    #[arg(long)]
    pub current: PathBuf,

    /// JSON facet list to converge on
    #[arg(long)]
    pub model: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> anyhow::Result<ExitCode> {
    let current: Vec<Facet> = read_json(&args.current)?;
    let model: Vec<Facet> = read_json(&args.model)?;

    let cut = ensure_diamond_facets(&current, &model)?;

    write_json(&cut, args.output.as_ref())?;
    Ok(ExitCode::SUCCESS)
}
