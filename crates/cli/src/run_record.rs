//! Run records: a `<stem>.run.json` file written beside every polygon set.

use anyhow::Result;
use polypart::PartitionStats;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io::{self, StatsDto};

/// What produced an output file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub command: String,
    pub polypart_version: String,
    pub code_rev: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub params: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsDto>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl RunRecord {
    pub fn new(command: &str, params: Value, tag: Option<String>) -> Self {
        Self {
            command: command.to_string(),
            polypart_version: polypart::VERSION.to_string(),
            code_rev: code_rev(),
            tag,
            params,
            stats: None,
            outputs: Vec::new(),
        }
    }

    pub fn with_stats(mut self, stats: Option<PartitionStats>) -> Self {
        self.stats = stats.map(StatsDto::from);
        self
    }

    /// Record `artifact` as the output and write the record next to it.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        self.outputs = vec![artifact.to_string_lossy().into_owned()];
        let path = record_path(artifact);
        io::write_json(&path, &self)?;
        Ok(path)
    }
}

/// `out/parts.json` → `out/parts.run.json`.
fn record_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("run.json")
}

/// `GIT_COMMIT` from the environment, else `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|out| out.status.success())
                .and_then(|out| String::from_utf8(out.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn record_path_replaces_extension() {
        assert_eq!(
            record_path(Path::new("/tmp/out/merged.json")),
            Path::new("/tmp/out/merged.run.json")
        );
        assert_eq!(
            record_path(Path::new("parts")),
            Path::new("parts.run.json")
        );
    }

    #[test]
    fn written_record_reads_back_with_stats() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("parts.json");
        let stats = PartitionStats {
            input: 4,
            output: 2,
            merges: 2,
            rejected: 2,
        };
        let record = RunRecord::new("partition", json!({"match_tol": 0.0}), Some("run-1".into()))
            .with_stats(Some(stats));
        let path = record.clone().write_beside(&artifact).unwrap();
        assert_eq!(path, dir.path().join("parts.run.json"));

        let back: RunRecord = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(back.outputs, vec![artifact.to_string_lossy().into_owned()]);
        assert_eq!(back.tag.as_deref(), Some("run-1"));
        assert_eq!(back.stats, Some(StatsDto::from(stats)));
        assert_eq!(back.params, record.params);
    }

    #[test]
    fn untagged_record_omits_optional_fields() {
        let record = RunRecord::new("tiles", json!({}), None);
        let text = serde_json::to_string(&record).unwrap();
        assert!(!text.contains("\"tag\""));
        assert!(!text.contains("\"stats\""));
        assert_eq!(record.polypart_version, polypart::VERSION);
    }
}
