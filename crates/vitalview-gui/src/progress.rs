use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;

use vitalview_core::asset::LoadProgress;

use crate::messages::WorkerResult;

/// Progress reporter that sends updates over an mpsc channel to the UI thread.
pub struct ChannelProgressReporter {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    current_total: AtomicUsize,
}

impl ChannelProgressReporter {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) -> Self {
        Self {
            tx,
            ctx,
            current_total: AtomicUsize::new(0),
        }
    }

    fn send(&self, items_done: usize) {
        let _ = self.tx.send(WorkerResult::Progress {
            items_done,
            items_total: self.current_total.load(Ordering::Relaxed),
        });
        self.ctx.request_repaint();
    }
}

impl LoadProgress for ChannelProgressReporter {
    fn begin(&self, total: usize) {
        self.current_total.store(total, Ordering::Relaxed);
        self.send(0);
    }

    fn advance(&self, done: usize) {
        self.send(done);
    }
}
