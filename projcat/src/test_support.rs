//! Test-only helpers for building throwaway source trees.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `files` as `(relative path, contents)` pairs beneath `root`,
/// creating intermediate directories as needed.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) -> Result<()> {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write file {}", path.display()))?;
    }
    Ok(())
}
