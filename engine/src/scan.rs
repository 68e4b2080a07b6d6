//! Folder scan and category filter.
//!
//! Lists one folder (non-recursively), classifies each file through the
//! category table, and groups the matches per category. Files that classify
//! as `Other` are left out of the listing entirely, as are subdirectories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::EngineError;
use crate::model::{FileCategory, CATEGORY_TABLE};

/// Files of one category found during a scan.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub category: FileCategory,
    pub folder: &'static str,
    pub files: Vec<PathBuf>,
}

/// Scan result: one group per category, in table order, possibly empty.
#[derive(Debug, Clone)]
pub struct FolderListing {
    pub groups: Vec<CategoryGroup>,
}

impl FolderListing {
    pub fn total_files(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_files() == 0
    }
}

/// Scan `folder` and group its files by category.
///
/// `name_filter` keeps only files whose name contains the given text,
/// case-insensitively. Output is name-sorted for stable display.
pub fn scan_folder(folder: &Path, name_filter: Option<&str>) -> Result<FolderListing, EngineError> {
    let mut groups: Vec<CategoryGroup> = CATEGORY_TABLE
        .iter()
        .map(|rule| CategoryGroup {
            category: rule.category,
            folder: rule.folder,
            files: Vec::new(),
        })
        .collect();

    let read = fs::read_dir(folder).map_err(|e| EngineError::FolderRead {
        path: folder.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| EngineError::FolderRead {
            path: folder.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let needle = name_filter.map(str::to_lowercase);
    for path in files {
        if let Some(needle) = &needle {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if !name.contains(needle.as_str()) {
                continue;
            }
        }
        let category = FileCategory::from_path(&path);
        if let Some(group) = groups.iter_mut().find(|g| g.category == category) {
            group.files.push(path);
        }
    }

    let listing = FolderListing { groups };
    debug!(
        folder = %folder.display(),
        files = listing.total_files(),
        "scanned folder"
    );
    Ok(listing)
}
