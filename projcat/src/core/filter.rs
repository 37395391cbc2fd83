//! Name-based inclusion rules for directories and files.
//!
//! All decisions here look at bare names, never at the filesystem: directory
//! pruning, exact file-name exclusion, the temp-file marker rule, and the
//! suffix allow-list.

use std::collections::BTreeSet;

/// File names containing this substring are generated temp files and never
/// included, regardless of extension.
const TEMP_FILE_MARKER: &str = "timestamp";

/// Static inclusion/exclusion rules applied during one run.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    excluded_dirs: BTreeSet<String>,
    excluded_files: BTreeSet<String>,
    accepted_extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(
        excluded_dirs: impl IntoIterator<Item = String>,
        excluded_files: impl IntoIterator<Item = String>,
        accepted_extensions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            excluded_dirs: excluded_dirs.into_iter().collect(),
            excluded_files: excluded_files.into_iter().collect(),
            accepted_extensions: accepted_extensions.into_iter().collect(),
        }
    }

    /// Exclude one more exact file name (used for the output document itself).
    pub fn with_excluded_file(mut self, name: impl Into<String>) -> Self {
        self.excluded_files.insert(name.into());
        self
    }

    /// True if a directory with this name must not be descended into.
    pub fn skips_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    /// True if this file name is barred regardless of extension: an exact
    /// member of the exclusion set, or carrying the temp-file marker.
    pub fn skips_file(&self, name: &str) -> bool {
        self.excluded_files.contains(name) || name.contains(TEMP_FILE_MARKER)
    }

    /// True if the name ends with one of the accepted suffixes.
    pub fn matches_extension(&self, name: &str) -> bool {
        self.accepted_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
    }

    /// Full inclusion decision for a file name.
    pub fn includes_file(&self, name: &str) -> bool {
        !self.skips_file(name) && self.matches_extension(name)
    }
}
