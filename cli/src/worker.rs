use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use engine::{run_transfer, CancelToken, TransferRequest};

use crate::progress::{ChannelProgress, TransferEvent};

/// Run a transfer on a dedicated worker thread.
///
/// The returned receiver yields progress events and always terminates with
/// either `Completed` or `SetupFailed`. Dropping the receiver does not stop
/// the run; use the token for that.
pub fn spawn_transfer(request: TransferRequest, cancel: CancelToken) -> Receiver<TransferEvent> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let sink = ChannelProgress::new(tx.clone());
        if let Err(e) = run_transfer(&request, Some(&sink), Some(&cancel)) {
            let (title, message) = e.report();
            let _ = tx.send(TransferEvent::SetupFailed { title, message });
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{RenamePattern, SourceFile};
    use std::fs;

    #[test]
    fn test_worker_streams_events_and_completes() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::write(root.join("a.txt"), b"data").expect("Failed to write");
        let request = TransferRequest::new(
            vec![SourceFile::new(root.join("a.txt"))],
            root.join("out"),
            false,
            false,
            RenamePattern::Seconds,
        );

        let events = spawn_transfer(request, CancelToken::new());
        let collected: Vec<TransferEvent> = events.iter().collect();

        assert!(matches!(
            collected.first(),
            Some(TransferEvent::Started { total_files: 1 })
        ));
        assert!(matches!(
            collected.last(),
            Some(TransferEvent::Completed { .. })
        ));
        assert!(root.join("out").join("a.txt").exists());
    }

    #[test]
    fn test_worker_reports_setup_failure() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::write(root.join("a.txt"), b"data").expect("Failed to write");
        // Target path occupied by a file
        let out = root.join("out");
        fs::write(&out, b"blocker").expect("Failed to write blocker");
        let request = TransferRequest::new(
            vec![SourceFile::new(root.join("a.txt"))],
            out,
            false,
            false,
            RenamePattern::Seconds,
        );

        let events = spawn_transfer(request, CancelToken::new());
        let collected: Vec<TransferEvent> = events.iter().collect();

        assert!(matches!(
            collected.last(),
            Some(TransferEvent::SetupFailed { .. })
        ));
        assert!(root.join("a.txt").exists());
    }
}
