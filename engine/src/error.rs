//! Error types for the transfer engine.
//!
//! `EngineError` covers fatal conditions that abort a run before any file is
//! touched, plus persistence failures in the settings/history helpers.
//! Per-file failures are never an `EngineError`: they are recorded as
//! `ErrorEntry` values in the outcome and the run continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Target root directory could not be created; aborts the run.
    #[error("could not create target directory {}: {}", .path.display(), .source)]
    TargetDirCreation { path: PathBuf, source: io::Error },

    /// A category subfolder could not be created; aborts the run.
    #[error("could not create category directory {}: {}", .path.display(), .source)]
    CategoryDirCreation { path: PathBuf, source: io::Error },

    /// A folder could not be enumerated (scan or source collection).
    #[error("could not read folder {}: {}", .path.display(), .source)]
    FolderRead { path: PathBuf, source: io::Error },

    /// Settings or history could not be encoded.
    #[error("could not serialize {}: {}", .path.display(), .source)]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Settings or history could not be written to disk.
    #[error("could not write {}: {}", .path.display(), .source)]
    WriteFile { path: PathBuf, source: io::Error },
}

impl EngineError {
    /// (title, message) pair for front-ends that surface failures as alerts.
    pub fn report(&self) -> (String, String) {
        let title = match self {
            Self::TargetDirCreation { .. } | Self::CategoryDirCreation { .. } => {
                "Directory creation failed"
            }
            Self::FolderRead { .. } => "Folder read failed",
            Self::Serialize { .. } | Self::WriteFile { .. } => "Save failed",
        };
        (title.to_string(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_splits_title_and_message() {
        let err = EngineError::TargetDirCreation {
            path: PathBuf::from("/nope/out"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let (title, message) = err.report();
        assert_eq!(title, "Directory creation failed");
        assert!(message.contains("/nope/out"));
        assert!(message.contains("denied"));
    }
}
