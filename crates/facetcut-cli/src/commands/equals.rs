//! Equals command
//!
//! Usage: facetcut equals --current <FILE> --model <FILE>
//!
//! Prints `true` or `false`; exits 0 when equal and 2 when not.

use clap::Args;
use facetcut_core::{diamond_equals, Facet};
use std::path::PathBuf;
use std::process::ExitCode;

use super::read_json;

/// Exit status when the facet lists differ
const EXIT_DIFFERENT: u8 = 2;

#[derive(Debug, Args)]
pub struct EqualsArgs {
    #[arg(long)]
    pub current: PathBuf,

    #[arg(long)]
    pub model: PathBuf,
}

pub fn execute(args: EqualsArgs) -> anyhow::Result<ExitCode> {
    let current: Vec<Facet> = read_json(&args.current)?;
    let model: Vec<Facet> = read_json(&args.model)?;

    let equal = diamond_equals(&current, &model)?;
    println!("{}", equal);

    Ok(if equal {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_DIFFERENT)
    })
}
