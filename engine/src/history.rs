//! Transfer history persistence.
//!
//! An append-only JSON list of runs, each entry a wall-clock timestamp plus
//! the files that run moved. The file keeps everything ever recorded; views
//! read through `recent`, which caps at the last 50 entries, newest first.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineError;
use crate::model::ProcessedFile;

/// How many entries `recent` surfaces; the file itself is unbounded.
pub const RECENT_LIMIT: usize = 50;

/// One recorded run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Wall-clock time of the run, `YYYY-MM-DD HH:MM:SS`
    pub time: String,
    pub files: Vec<ProcessedFile>,
}

/// Load history, falling back to empty on a missing or corrupt file.
pub fn load(path: &Path) -> Vec<HistoryEntry> {
    match fs::read_to_string(path) {
        Ok(body) => match serde_json::from_str(&body) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable history, starting empty");
                Vec::new()
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read history, starting empty");
            Vec::new()
        }
    }
}

/// Record a run's moved files, stamped with the current time, and persist.
pub fn append(
    path: &Path,
    entries: &mut Vec<HistoryEntry>,
    files: Vec<ProcessedFile>,
) -> Result<(), EngineError> {
    entries.push(HistoryEntry {
        time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        files,
    });
    save(path, entries)
}

/// Write the full history list as pretty-printed JSON.
pub fn save(path: &Path, entries: &[HistoryEntry]) -> Result<(), EngineError> {
    let body = serde_json::to_string_pretty(entries).map_err(|e| EngineError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, body).map_err(|e| EngineError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// The display view: most recent entries first, capped at `RECENT_LIMIT`.
pub fn recent(entries: &[HistoryEntry]) -> impl Iterator<Item = &HistoryEntry> {
    entries.iter().rev().take(RECENT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileCategory;
    use std::path::PathBuf;

    fn processed(name: &str) -> ProcessedFile {
        ProcessedFile {
            name: name.to_string(),
            category: FileCategory::Document,
            folder: "documents".to_string(),
            path: PathBuf::from("/out/documents").join(name),
            relative_path: PathBuf::from("documents").join(name),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        assert!(load(&temp_dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("history.json");
        fs::write(&path, "{\"not\": \"a list\"}").expect("Failed to write");
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_append_persists_and_round_trips() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("history.json");
        let mut entries = load(&path);

        append(&path, &mut entries, vec![processed("a.pdf")]).expect("Failed to append");
        append(&path, &mut entries, vec![processed("b.pdf"), processed("c.pdf")])
            .expect("Failed to append");

        let reloaded = load(&path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded, entries);
        assert_eq!(reloaded[1].files.len(), 2);
        assert_eq!(reloaded[0].files[0].name, "a.pdf");
    }

    #[test]
    fn test_recent_caps_at_limit_newest_first() {
        let entries: Vec<HistoryEntry> = (0..60)
            .map(|i| HistoryEntry {
                time: format!("2025-01-01 00:00:{:02}", i % 60),
                files: vec![processed(&format!("f{}.pdf", i))],
            })
            .collect();

        let view: Vec<&HistoryEntry> = recent(&entries).collect();
        assert_eq!(view.len(), RECENT_LIMIT);
        // Newest entry leads, oldest ten never show
        assert_eq!(view[0].files[0].name, "f59.pdf");
        assert_eq!(view[49].files[0].name, "f10.pdf");
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = HistoryEntry {
            time: "2025-03-09 14:30:05".to_string(),
            files: vec![processed("a.pdf")],
        };
        let json = serde_json::to_string(&entry).expect("serialize");
        assert!(json.contains("\"time\":\"2025-03-09 14:30:05\""));
        assert!(json.contains("\"category\":\"documents\""));
        assert!(json.contains("\"relative_path\":\"documents/a.pdf\""));
    }
}
