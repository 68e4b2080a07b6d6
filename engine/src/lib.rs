//! # DropSort Engine - File Organizing Library
//!
//! A headless engine for sorting dropped files into categorized folders.
//! Designed as the foundation for multiple front-ends (CLI, GUI, automation).
//!
//! ## Overview
//!
//! The engine moves batches of files into a target directory, classifying
//! each one by extension and optionally renaming images to timestamp-derived
//! names. It features:
//! - Extension-based categorization through a single static table
//! - Per-file error isolation: one bad file never blocks the rest
//! - Progress reporting via callbacks (decoupled from UI technology)
//! - Cooperative cancellation between files
//! - JSON settings and run-history persistence for front-ends to share
//!
//! ## Basic Usage
//!
//! ```no_run
//! use engine::{run_transfer, RenamePattern, SourceFile, TransferRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = TransferRequest::new(
//!     vec![
//!         SourceFile::new("/downloads/photo.jpg"),
//!         SourceFile::new("/downloads/clip.mp4"),
//!     ],
//!     "/sorted",
//!     true,
//!     true,
//!     RenamePattern::Seconds,
//! );
//!
//! let outcome = run_transfer(&request, None, None)?;
//! println!(
//!     "{} moved, {} failed",
//!     outcome.processed.len(),
//!     outcome.errors.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - **model**: Core data structures (TransferRequest, outcome records, enums)
//! - **error**: Error types and handling
//! - **fs_ops**: Low-level filesystem operations
//! - **job**: Run orchestration and cancellation
//! - **progress**: Progress callback trait
//! - **scan**: Folder listing grouped by category
//! - **cleanse**: Preset-based text cleaning
//! - **settings**: Persisted user settings
//! - **history**: Run-history persistence

pub mod cleanse;
pub mod error;
pub mod fs_ops;
pub mod history;
pub mod job;
pub mod model;
mod naming;
pub mod progress;
pub mod scan;
pub mod settings;

// Re-export main types and functions
pub use error::EngineError;
pub use job::{run_transfer, CancelToken};
pub use model::{
    ErrorEntry, FileCategory, ProcessedFile, RenamePattern, SourceFile, TransferOutcome,
    TransferRequest, CATEGORY_TABLE,
};
pub use progress::ProgressSink;
pub use scan::{scan_folder, FolderListing};
pub use settings::Settings;
