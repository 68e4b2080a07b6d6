//! Core data model for transfer runs.
//!
//! This module defines the main data structures for representing a transfer:
//! - TransferRequest: one user-initiated batch of files to move
//! - SourceFile: a single input (path plus optional custom display name)
//! - ProcessedFile / ErrorEntry / TransferOutcome: the per-file results
//! - FileCategory, RenamePattern: enums controlling classification and naming

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a file by its extension.
///
/// Every category except `Other` owns a fixed subfolder of the target
/// directory when categorization is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileCategory {
    #[serde(rename = "images")]
    Image,
    #[serde(rename = "videos")]
    Video,
    #[serde(rename = "audios")]
    Audio,
    #[serde(rename = "htmls")]
    Html,
    #[serde(rename = "documents")]
    Document,
    #[serde(rename = "other")]
    Other,
}

/// One row of the extension lookup table.
#[derive(Debug)]
pub struct CategoryRule {
    pub category: FileCategory,
    pub extensions: &'static [&'static str],
    pub folder: &'static str,
}

/// The extension lookup table, consulted once per file, in order.
///
/// `Other` has no row: anything that falls through stays uncategorized.
pub const CATEGORY_TABLE: &[CategoryRule] = &[
    CategoryRule {
        category: FileCategory::Image,
        extensions: &["jpg", "jpeg", "png", "gif"],
        folder: "images",
    },
    CategoryRule {
        category: FileCategory::Video,
        extensions: &["mp4", "mov", "avi", "mkv", "flv", "wmv"],
        folder: "videos",
    },
    CategoryRule {
        category: FileCategory::Audio,
        extensions: &["mp3", "wav", "flac", "aac"],
        folder: "audios",
    },
    CategoryRule {
        category: FileCategory::Html,
        extensions: &["html", "htm"],
        folder: "htmls",
    },
    CategoryRule {
        category: FileCategory::Document,
        extensions: &[
            "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "md", "epub", "mobi",
            "azw3", "chm",
        ],
        folder: "documents",
    },
];

impl FileCategory {
    /// Classify a bare extension (no leading dot), case-insensitively.
    pub fn from_extension(ext: &str) -> FileCategory {
        for rule in CATEGORY_TABLE {
            if rule.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
                return rule.category;
            }
        }
        FileCategory::Other
    }

    /// Classify a path by its extension. Extension-free paths are `Other`.
    pub fn from_path(path: &Path) -> FileCategory {
        match path.extension() {
            Some(ext) => Self::from_extension(&ext.to_string_lossy()),
            None => FileCategory::Other,
        }
    }

    /// The category subfolder name, or None for `Other`.
    pub fn folder_name(self) -> Option<&'static str> {
        CATEGORY_TABLE
            .iter()
            .find(|rule| rule.category == self)
            .map(|rule| rule.folder)
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileCategory::Image => "images",
            FileCategory::Video => "videos",
            FileCategory::Audio => "audios",
            FileCategory::Html => "htmls",
            FileCategory::Document => "documents",
            FileCategory::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Timestamp granularity for auto-renamed images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenamePattern {
    #[serde(rename = "seconds")]
    Seconds,
    #[serde(rename = "milliseconds")]
    Milliseconds,
}

impl RenamePattern {
    /// Parse a user-supplied pattern name. Returns None for unknown input.
    pub fn from_str(s: &str) -> Option<RenamePattern> {
        match s.to_lowercase().as_str() {
            "seconds" | "s" => Some(RenamePattern::Seconds),
            "millis" | "milliseconds" | "ms" => Some(RenamePattern::Milliseconds),
            _ => None,
        }
    }
}

impl fmt::Display for RenamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenamePattern::Seconds => write!(f, "seconds"),
            RenamePattern::Milliseconds => write!(f, "milliseconds"),
        }
    }
}

/// A single input file: where it is now, and an optional custom display name
/// that replaces the original stem for non-video, non-auto-renamed files.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub custom_name: Option<String>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SourceFile {
            path: path.into(),
            custom_name: None,
        }
    }

    /// An empty custom name counts as no custom name.
    pub fn with_name(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let name = name.into();
        SourceFile {
            path: path.into(),
            custom_name: if name.is_empty() { None } else { Some(name) },
        }
    }

    /// The source's file name, for labels and error messages.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// One user-initiated transfer: constructed fresh per run, never reused.
#[derive(Debug)]
pub struct TransferRequest {
    /// Unique identifier for this run, used in log output
    pub id: Uuid,

    /// Ordered inputs; processed one at a time
    pub sources: Vec<SourceFile>,

    /// Root destination directory; created if missing
    pub target_dir: PathBuf,

    /// Sort recognized categories into per-type subfolders
    pub categorize: bool,

    /// Replace image names with timestamp-derived names
    pub auto_rename_images: bool,

    /// Timestamp granularity when auto-rename is active
    pub rename_pattern: RenamePattern,
}

impl TransferRequest {
    pub fn new(
        sources: Vec<SourceFile>,
        target_dir: impl Into<PathBuf>,
        categorize: bool,
        auto_rename_images: bool,
        rename_pattern: RenamePattern,
    ) -> Self {
        TransferRequest {
            id: Uuid::new_v4(),
            sources,
            target_dir: target_dir.into(),
            categorize,
            auto_rename_images,
            rename_pattern,
        }
    }
}

/// The record of one successfully relocated file.
///
/// Persisted verbatim into the history file and rendered by front-ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedFile {
    /// Final file name, stem plus lowercased extension
    pub name: String,

    /// Category the file classified into
    pub category: FileCategory,

    /// Name of the directory the file landed in
    pub folder: String,

    /// Absolute destination path
    pub path: PathBuf,

    /// folder/name, as shown in history views
    pub relative_path: PathBuf,
}

impl ProcessedFile {
    /// Markdown link for pasting into documents; images embed, the rest link.
    pub fn markdown_link(&self) -> String {
        match self.category {
            FileCategory::Image => format!("![{}]({})", self.name, self.path.display()),
            _ => format!("[{}]({})", self.name, self.path.display()),
        }
    }

    /// HTML snippet matching the file type.
    pub fn html_snippet(&self) -> String {
        let path = self.path.display();
        match self.category {
            FileCategory::Image => {
                format!(r#"<img src="{}" alt="{}" width="300">"#, path, self.name)
            }
            FileCategory::Video => {
                format!(r#"<video src="{}" controls width="500"></video>"#, path)
            }
            FileCategory::Audio => format!(r#"<audio src="{}" controls>Audio</audio>"#, path),
            _ => format!(r#"<a href="{}" target="_blank">{}</a>"#, path, self.name),
        }
    }
}

/// The record of one file that could not be moved.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEntry {
    pub source: PathBuf,
    pub message: String,
}

/// Terminal result of a run: every input lands in exactly one of these lists,
/// in input order.
#[derive(Debug, Clone, Default)]
pub struct TransferOutcome {
    pub errors: Vec<ErrorEntry>,
    pub processed: Vec<ProcessedFile>,
}

impl TransferOutcome {
    pub fn total(&self) -> usize {
        self.errors.len() + self.processed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
