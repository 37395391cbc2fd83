//! Aggregation configuration, optionally stored in `projcat.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::document::DEFAULT_TITLE;

/// Name of the optional config file looked up under the traversal root.
pub const CONFIG_FILE_NAME: &str = "projcat.toml";

/// Aggregation configuration (TOML).
///
/// Constructed once at process start and passed into the run; nothing reads
/// it through globals. Missing fields fall back to the compiled-in defaults,
/// so a bare `run` with no config file behaves identically to the defaults
/// below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AggregateConfig {
    /// Title written at the top of the aggregate document.
    pub title: String,

    /// Output document path, resolved against the traversal root.
    pub output: PathBuf,

    /// Directory names never descended into.
    pub excluded_dirs: Vec<String>,

    /// Exact file names never read. The output file's own name is added at
    /// run time.
    pub excluded_files: Vec<String>,

    /// Accepted file-name suffixes, in match order.
    pub accepted_extensions: Vec<String>,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            output: PathBuf::from("projeto_completo.txt"),
            excluded_dirs: [
                "node_modules",
                ".git",
                "dist",
                "dist-renderer",
                "release-builds",
                "build",
                "backup",
                ".vscode",
            ]
            .map(String::from)
            .to_vec(),
            excluded_files: ["package-lock.json", "vite.config.js.timestamp"]
                .map(String::from)
                .to_vec(),
            accepted_extensions: [
                ".js", ".cjs", ".mjs", ".ts", ".tsx", ".vue", ".html", ".css", ".json",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl AggregateConfig {
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(anyhow!("output must not be empty"));
        }
        if self.accepted_extensions.is_empty() {
            return Err(anyhow!("accepted_extensions must not be empty"));
        }
        // A blank suffix would match every file name.
        if self.accepted_extensions.iter().any(|ext| ext.is_empty()) {
            return Err(anyhow!("accepted_extensions entries must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AggregateConfig::default()`.
pub fn load_config(path: &Path) -> Result<AggregateConfig> {
    if !path.exists() {
        let cfg = AggregateConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AggregateConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &AggregateConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, AggregateConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        let cfg = AggregateConfig {
            output: PathBuf::from("everything.txt"),
            excluded_dirs: vec!["target".to_string()],
            ..AggregateConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "output = \"bundle.txt\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.output, PathBuf::from("bundle.txt"));
        assert_eq!(
            cfg.excluded_dirs,
            AggregateConfig::default().excluded_dirs
        );
    }

    #[test]
    fn validate_rejects_empty_extension_list() {
        let cfg = AggregateConfig {
            accepted_extensions: Vec::new(),
            ..AggregateConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn validate_rejects_blank_extension() {
        let cfg = AggregateConfig {
            accepted_extensions: vec![String::new()],
            ..AggregateConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
