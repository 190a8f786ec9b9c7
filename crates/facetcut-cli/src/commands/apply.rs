//! Apply command
//!
//! Usage: facetcut apply --current <FILE> --cuts <FILE> [--output <FILE>]

use clap::Args;
use facetcut_core::{apply_cuts_to_facets, Facet, FacetCut};
use std::path::PathBuf;
use std::process::ExitCode;

use super::{read_json, write_json};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON facet list to start from
    #[arg(long)]
    pub current: PathBuf,

    /// JSON cut list, as printed by `facetcut diff`
    #[arg(long)]
    pub cuts: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute apply command
pub fn execute(args: ApplyArgs) -> anyhow::Result<ExitCode> {
    let current: Vec<Facet> = read_json(&args.current)?;
    let cuts: Vec<FacetCut> = read_json(&args.cuts)?;

    let facets = apply_cuts_to_facets(&current, &cuts)?;

    write_json(&facets, args.output.as_ref())?;
    Ok(ExitCode::SUCCESS)
}
