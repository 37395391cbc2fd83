//! Orchestration of one aggregation run.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::filter::FileFilter;
use crate::core::summary::RunSummary;
use crate::io::config::AggregateConfig;
use crate::io::reader::read_text_lossy;
use crate::io::walk::collect_files;
use crate::io::writer::DocumentWriter;

/// Run one aggregation: walk `root`, filter by name rules, and stream every
/// qualifying file into the output document.
///
/// Per-file read failures are recorded inline in the document and never
/// abort the run. Structural failures (unreadable root, unwritable output,
/// invalid config) do.
pub fn aggregate(root: &Path, config: &AggregateConfig) -> Result<RunSummary> {
    config.validate()?;

    let output_path = root.join(&config.output);
    let mut filter = FileFilter::new(
        config.excluded_dirs.iter().cloned(),
        config.excluded_files.iter().cloned(),
        config.accepted_extensions.iter().cloned(),
    );
    // The output is created before the walk, so the walk sees it; the
    // document must never ingest itself.
    if let Some(name) = output_path.file_name() {
        filter = filter.with_excluded_file(name.to_string_lossy());
    }

    let mut writer = DocumentWriter::create(&output_path, &config.title)?;
    let candidates = collect_files(root, &filter)?;

    let mut summary = RunSummary {
        output: output_path,
        ..RunSummary::default()
    };
    for path in candidates {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        if !filter.includes_file(&name) {
            debug!(path = %path.display(), "skipped by name rules");
            summary.files_skipped += 1;
            continue;
        }
        match read_text_lossy(&path) {
            Ok(contents) => {
                writer.append_file(&path, &contents)?;
                summary.files_included += 1;
                info!(path = %path.display(), "included");
            }
            Err(err) => {
                let detail = format!("{err:#}");
                writer.append_read_error(&path, &detail)?;
                summary.read_errors += 1;
                warn!(path = %path.display(), error = %detail, "read failed");
            }
        }
    }

    writer.finish()?;
    Ok(summary)
}
