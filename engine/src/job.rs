//! Run orchestration module.
//!
//! `run_transfer` executes one TransferRequest: it creates the target
//! directory (and category subfolders when categorization is on), then moves
//! each file in order, classifying and naming it along the way. Setup
//! failures abort the run before anything is touched; per-file failures are
//! recorded and never stop the remaining files.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error};

use crate::error::EngineError;
use crate::fs_ops;
use crate::model::{
    ErrorEntry, FileCategory, ProcessedFile, SourceFile, TransferOutcome, TransferRequest,
    CATEGORY_TABLE,
};
use crate::naming::{self, NameAllocator};
use crate::progress::ProgressSink;

/// Cooperative cancellation flag, checked before each file.
///
/// Cancelling never rolls anything back: files already moved stay moved, and
/// every remaining file is reported as an error without being touched.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Execute a transfer request.
///
/// Emits one progress notification per file and a completion notification
/// with the terminal outcome. Returns Err only for fatal setup failures
/// (target or category directory could not be created), in which case no
/// file has been moved.
pub fn run_transfer(
    request: &TransferRequest,
    progress: Option<&dyn ProgressSink>,
    cancel: Option<&CancelToken>,
) -> Result<TransferOutcome, EngineError> {
    fs_ops::ensure_dir_exists(&request.target_dir).map_err(|e| EngineError::TargetDirCreation {
        path: request.target_dir.clone(),
        source: e,
    })?;

    if request.categorize {
        for rule in CATEGORY_TABLE {
            let dir = request.target_dir.join(rule.folder);
            fs_ops::ensure_dir_exists(&dir).map_err(|e| EngineError::CategoryDirCreation {
                path: dir.clone(),
                source: e,
            })?;
        }
    }

    if let Some(sink) = progress {
        sink.on_run_started(request.sources.len());
    }

    let total = request.sources.len().max(1);
    let mut alloc = NameAllocator::new();
    let mut outcome = TransferOutcome::default();

    for (index, source) in request.sources.iter().enumerate() {
        let percent = (((index + 1) * 100) / total) as u8;

        if cancel.map_or(false, CancelToken::is_cancelled) {
            debug!(
                run = %request.id,
                source = %source.path.display(),
                "run cancelled, leaving file in place"
            );
            outcome.errors.push(ErrorEntry {
                source: source.path.clone(),
                message: "transfer cancelled".to_string(),
            });
            if let Some(sink) = progress {
                sink.on_file_progress(percent, &format!("Cancelled: {}", source.file_name()));
            }
            continue;
        }

        let label = match move_one(request, source, &mut alloc) {
            Ok(done) => {
                let label = format!("Moving: {}", done.name);
                outcome.processed.push(done);
                label
            }
            Err(message) => {
                error!(
                    run = %request.id,
                    source = %source.path.display(),
                    reason = %message,
                    "file failed"
                );
                let label = format!("Failed: {}", source.file_name());
                outcome.errors.push(ErrorEntry {
                    source: source.path.clone(),
                    message,
                });
                label
            }
        };

        if let Some(sink) = progress {
            sink.on_file_progress(percent, &label);
        }
    }

    if let Some(sink) = progress {
        sink.on_run_completed(&outcome);
    }

    Ok(outcome)
}

/// Classify, name, and move a single file.
fn move_one(
    request: &TransferRequest,
    source: &SourceFile,
    alloc: &mut NameAllocator,
) -> Result<ProcessedFile, String> {
    let category = FileCategory::from_path(&source.path);
    let stem = naming::choose_name(
        source,
        category,
        request.auto_rename_images,
        request.rename_pattern,
        alloc,
    );
    let ext = naming::extension_of(&source.path);
    let file_name = if ext.is_empty() {
        stem
    } else {
        format!("{}.{}", stem, ext)
    };

    let dest_dir = match category.folder_name() {
        Some(folder) if request.categorize => request.target_dir.join(folder),
        _ => request.target_dir.clone(),
    };
    let dest_path = dest_dir.join(&file_name);

    debug!(
        run = %request.id,
        source = %source.path.display(),
        category = %category,
        name = %file_name,
        dest = %dest_path.display(),
        "processing file"
    );

    // Re-check right before the move; the setup pass may have raced with
    // something deleting the folder.
    fs_ops::ensure_dir_exists(&dest_dir)
        .map_err(|e| format!("could not create {}: {}", dest_dir.display(), e))?;

    if dest_path.exists() {
        return Err(format!(
            "destination already exists: {}",
            dest_path.display()
        ));
    }

    fs_ops::move_file(&source.path, &dest_path)
        .map_err(|e| format!("could not move {}: {}", source.path.display(), e))?;

    let folder = dest_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dest_dir.display().to_string());

    Ok(ProcessedFile {
        relative_path: Path::new(&folder).join(&file_name),
        name: file_name,
        category,
        folder,
        path: dest_path,
    })
}
