use crossbeam_channel::Sender;
use engine::{ProgressSink, TransferOutcome};

/// Events the worker thread reports back to the front-end.
#[derive(Debug, Clone)]
pub enum TransferEvent {
    Started {
        total_files: usize,
    },
    Progress {
        percent: u8,
        label: String,
    },
    /// Terminal: the run finished, some files possibly failed.
    Completed {
        outcome: TransferOutcome,
    },
    /// Terminal: setup failed before any file was touched.
    SetupFailed {
        title: String,
        message: String,
    },
}

/// A ProgressSink implementation that forwards engine callbacks over a
/// channel. Sends are fire-and-forget; a hung receiver never blocks the run.
pub struct ChannelProgress {
    sender: Sender<TransferEvent>,
}

impl ChannelProgress {
    pub fn new(sender: Sender<TransferEvent>) -> Self {
        ChannelProgress { sender }
    }
}

impl ProgressSink for ChannelProgress {
    fn on_run_started(&self, total_files: usize) {
        let _ = self.sender.send(TransferEvent::Started { total_files });
    }

    fn on_file_progress(&self, percent: u8, label: &str) {
        let _ = self.sender.send(TransferEvent::Progress {
            percent,
            label: label.to_string(),
        });
    }

    fn on_run_completed(&self, outcome: &TransferOutcome) {
        let _ = self.sender.send(TransferEvent::Completed {
            outcome: outcome.clone(),
        });
    }
}
