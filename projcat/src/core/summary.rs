//! Counters reported at the end of an aggregation run.

use std::path::PathBuf;

use serde::Serialize;

/// Facts about one completed run, printed to the operator and optionally
/// written as a JSON report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Resolved path of the aggregate document.
    pub output: PathBuf,
    /// Files whose contents were written to the document.
    pub files_included: usize,
    /// Files rejected by name or suffix rules.
    pub files_skipped: usize,
    /// Files that produced a placeholder entry instead of contents.
    pub read_errors: usize,
}
