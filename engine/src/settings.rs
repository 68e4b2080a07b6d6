//! Persisted user settings.
//!
//! A flat JSON file mirroring what the front-end remembers between runs:
//! target directory, categorization and rename flags, and whether the
//! history panel is shown. Loading never fails; a missing or unreadable
//! file yields the defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineError;
use crate::model::RenamePattern;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub target_dir: PathBuf,
    pub categorize_files: bool,
    pub auto_rename_images: bool,
    pub rename_pattern: RenamePattern,
    pub history_visible: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            target_dir: PathBuf::from("output"),
            categorize_files: false,
            auto_rename_images: true,
            rename_pattern: RenamePattern::Seconds,
            history_visible: true,
        }
    }
}

/// Load settings, falling back to defaults on a missing or corrupt file.
pub fn load(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(body) => match serde_json::from_str(&body) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
                Settings::default()
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read settings, using defaults");
            Settings::default()
        }
    }
}

/// Write settings as pretty-printed JSON.
pub fn save(path: &Path, settings: &Settings) -> Result<(), EngineError> {
    let body = serde_json::to_string_pretty(settings).map_err(|e| EngineError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, body).map_err(|e| EngineError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
