//! Buffered sink for the aggregate document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::document;

/// Append-only sink for the aggregate document.
///
/// The underlying handle is released on drop, so a traversal error that
/// aborts a run early still closes the partially written document. The
/// success path goes through [`DocumentWriter::finish`] so buffered-write
/// errors surface instead of being swallowed by drop.
#[derive(Debug)]
pub struct DocumentWriter {
    inner: BufWriter<File>,
    path: PathBuf,
}

impl DocumentWriter {
    /// Create (truncating) the output document and write the title banner.
    pub fn create(path: &Path, title: &str) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("create output file {}", path.display()))?;
        let mut writer = Self {
            inner: BufWriter::new(file),
            path: path.to_path_buf(),
        };
        writer.write_text(&document::banner(title))?;
        Ok(writer)
    }

    /// Append one file's delimiter block and verbatim contents.
    pub fn append_file(&mut self, shown_path: &Path, contents: &str) -> Result<()> {
        self.write_text(&document::entry_header(&shown_path.display().to_string()))?;
        self.write_text(contents)?;
        self.write_text("\n")
    }

    /// Append a delimiter block with an error placeholder instead of contents.
    pub fn append_read_error(&mut self, shown_path: &Path, detail: &str) -> Result<()> {
        self.write_text(&document::entry_header(&shown_path.display().to_string()))?;
        self.write_text(&document::read_error_placeholder(detail))?;
        self.write_text("\n")
    }

    /// Flush buffered contents and close the document.
    pub fn finish(mut self) -> Result<()> {
        self.inner
            .flush()
            .with_context(|| format!("flush output file {}", self.path.display()))
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .write_all(text.as_bytes())
            .with_context(|| format!("write output file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_banner_then_entries() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.txt");

        let mut writer = DocumentWriter::create(&path, "TITLE").expect("create");
        writer
            .append_file(Path::new("./a.js"), "X")
            .expect("append");
        writer
            .append_read_error(Path::new("./b.js"), "denied")
            .expect("append error");
        writer.finish().expect("finish");

        let doc = fs::read_to_string(&path).expect("read");
        assert_eq!(
            doc,
            "TITLE\n========================================\n\n\
             \n====================\nARQUIVO: ./a.js\n====================\nX\n\
             \n====================\nARQUIVO: ./b.js\n====================\n\
             [Erro ao ler este arquivo: denied]\n"
        );
    }

    #[test]
    fn create_truncates_previous_document() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.txt");
        fs::write(&path, "stale").expect("seed");

        let writer = DocumentWriter::create(&path, "T").expect("create");
        writer.finish().expect("finish");

        let doc = fs::read_to_string(&path).expect("read");
        assert_eq!(doc, "T\n========================================\n\n");
    }

    #[test]
    fn create_fails_in_missing_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = DocumentWriter::create(&temp.path().join("no/dir/out.txt"), "T").unwrap_err();
        assert!(err.to_string().contains("create output file"));
    }
}
