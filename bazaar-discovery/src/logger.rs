//! Fire-and-forget search log dispatch.
//!
//! Wraps any [`ISearchLogger`] sink in a bounded background worker so that
//! log writes never block the discovery response path and sink failures
//! never reach the caller. A full queue drops the entry.

use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use tracing::warn;

use bazaar_core::models::SearchLogEntry;
use bazaar_core::traits::ISearchLogger;

/// Bounded background worker in front of a search log sink.
///
/// `log` is non-blocking: entries are queued and written by a dedicated
/// thread. On drop, the queue is drained before the worker exits, so
/// short-lived test processes still observe their entries.
pub struct BackgroundLogWorker {
    sender: Option<SyncSender<SearchLogEntry>>,
    handle: Option<JoinHandle<()>>,
}

impl BackgroundLogWorker {
    /// Spawn the worker thread. `queue_depth` bounds in-flight entries.
    pub fn spawn(sink: Box<dyn ISearchLogger>, queue_depth: usize) -> Self {
        let (sender, receiver) = mpsc::sync_channel::<SearchLogEntry>(queue_depth.max(1));

        let handle = thread::Builder::new()
            .name("search-log-worker".to_string())
            .spawn(move || {
                for entry in receiver {
                    sink.log(entry);
                }
            })
            .expect("failed to spawn search-log worker thread");

        Self {
            sender: Some(sender),
            handle: Some(handle),
        }
    }
}

impl ISearchLogger for BackgroundLogWorker {
    fn log(&self, entry: SearchLogEntry) {
        let Some(sender) = &self.sender else {
            return;
        };
        match sender.try_send(entry) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!("search log queue full, dropping entry");
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!("search log worker gone, dropping entry");
            }
        }
    }
}

impl Drop for BackgroundLogWorker {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain and exit.
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
