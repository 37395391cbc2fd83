//! Permissive text reads for source files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a file as UTF-8, replacing invalid byte sequences with U+FFFD.
///
/// Decoding never fails; only the underlying read can. Undecodable bytes in
/// an otherwise readable file must not abort a run, and the replacement
/// character keeps the surrounding decodable content intact in the document.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
