//! Work-list traversal producing candidate files in a stable order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::core::filter::FileFilter;

/// Collect all regular files beneath `root`, pruning excluded directories.
///
/// Directories whose name is in the filter's exclusion set are never
/// descended into, so excluded subtrees cost nothing. The walk is iterative
/// over an explicit stack and visits depth-first, listing each directory's
/// files (sorted by name) before its subdirectories, so repeated runs over
/// an unchanged tree yield the same order on any platform.
///
/// A subdirectory that cannot be listed is logged and skipped; only an
/// unlistable `root` is an error. Symlinks are not followed.
pub fn collect_files(root: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let mut pending = vec![root.to_path_buf()];
    let mut collected = Vec::new();

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                if dir.as_path() == root {
                    return Err(err)
                        .with_context(|| format!("read root directory {}", root.display()));
                }
                warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
                continue;
            }
        };

        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    warn!(path = %entry.path().display(), error = %err, "skipping entry");
                    continue;
                }
            };
            if file_type.is_dir() {
                if !filter.skips_dir(&entry.file_name().to_string_lossy()) {
                    subdirs.push(entry.path());
                }
            } else if file_type.is_file() {
                files.push(entry.path());
            }
            // Symlinks and other special entries are left alone.
        }

        files.sort();
        collected.extend(files);

        // Reverse so the stack pops subdirectories in ascending name order.
        subdirs.sort();
        for sub in subdirs.into_iter().rev() {
            pending.push(sub);
        }
    }

    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_tree;

    fn filter() -> FileFilter {
        FileFilter::new(
            ["node_modules".to_string(), ".git".to_string()],
            [],
            [".js".to_string()],
        )
    }

    fn relative(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|path| {
                path.strip_prefix(root)
                    .expect("under root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn prunes_excluded_directories_transitively() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_tree(
            temp.path(),
            &[
                ("a.js", "A"),
                ("node_modules/direct.js", "N"),
                ("sub/node_modules/nested.js", "N"),
                ("sub/keep.js", "K"),
            ],
        )
        .expect("tree");

        let collected = collect_files(temp.path(), &filter()).expect("walk");
        let names = relative(&collected, temp.path());
        assert_eq!(names, vec!["a.js", "sub/keep.js"]);
    }

    #[test]
    fn visits_sorted_files_before_subdirectories() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_tree(
            temp.path(),
            &[
                ("c.js", ""),
                ("a.js", ""),
                ("b/inner.js", ""),
                ("b/a/deep.js", ""),
            ],
        )
        .expect("tree");

        let collected = collect_files(temp.path(), &filter()).expect("walk");
        let names = relative(&collected, temp.path());
        assert_eq!(names, vec!["a.js", "c.js", "b/a/deep.js", "b/inner.js"]);
    }

    #[test]
    fn collects_every_regular_file_regardless_of_suffix() {
        // Suffix rules are applied by the caller; the walk only prunes dirs.
        let temp = tempfile::tempdir().expect("tempdir");
        write_tree(temp.path(), &[("notes.md", ""), ("a.js", "")]).expect("tree");

        let collected = collect_files(temp.path(), &filter()).expect("walk");
        let names = relative(&collected, temp.path());
        assert_eq!(names, vec!["a.js", "notes.md"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = collect_files(&temp.path().join("nope"), &filter()).unwrap_err();
        assert!(err.to_string().contains("read root directory"));
    }
}
