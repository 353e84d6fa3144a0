//! Show command implementation.
//!
//! Reads an insights file written by `query --output` and prints it as a
//! ranked table.

use crate::output::{format_summary, read_insights};
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Load a saved insights file and render the text table
pub fn render_insights_file(file_path: &Path, top: usize) -> Result<String> {
    let entries = read_insights(file_path)
        .with_context(|| format!("Failed to read insights from {}", file_path.display()))?;
    info!("Loaded {} entries from {}", entries.len(), file_path.display());

    Ok(format!(
        "Insights: {} ({} entries)\n{}",
        file_path.display(),
        entries.len(),
        format_summary(&entries, top)
    ))
}

/// Execute the show command
pub fn execute_show(file_path: &Path, top: usize) -> Result<()> {
    println!("{}", render_insights_file(file_path, top)?);
    Ok(())
}
