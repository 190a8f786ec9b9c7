pub mod apply;
pub mod diff;
pub mod equals;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Read and parse a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Pretty-print `value` as JSON to `output`, or stdout when absent
pub fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(output_path) = output {
        std::fs::write(output_path, format!("{}\n", json))
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        tracing::info!(path = %output_path.display(), "wrote output");
    } else {
        println!("{}", json);
    }
    Ok(())
}
