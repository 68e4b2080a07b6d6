//! Progress reporting trait.
//!
//! This module defines the ProgressSink trait, which decouples the transfer
//! engine from any specific front-end. Notifications are fire-and-forget:
//! implementations must not block, and the engine never waits on them.

use crate::model::TransferOutcome;

/// Trait for receiving progress updates from a transfer run.
///
/// All methods are called synchronously from the worker executing the run,
/// once per run for started/completed and once per file in between.
pub trait ProgressSink: Send {
    /// Called after setup succeeds, before the first file is processed.
    fn on_run_started(&self, total_files: usize);

    /// Called after each file, whether it moved or failed.
    ///
    /// `percent` is the completed fraction of the run in [0, 100]; `label`
    /// names the file that was just handled.
    fn on_file_progress(&self, percent: u8, label: &str);

    /// Called once with the terminal outcome after the last file.
    fn on_run_completed(&self, outcome: &TransferOutcome);
}
