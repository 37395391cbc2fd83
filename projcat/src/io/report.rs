//! Machine-readable run reports.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::summary::RunSummary;

/// Write the run summary as pretty-printed JSON with a trailing newline.
pub fn write_report(path: &Path, summary: &RunSummary) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(summary).context("serialize run report")?;
    payload.push('\n');
    fs::write(path, payload).with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
