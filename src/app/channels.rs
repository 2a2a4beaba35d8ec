//! Channel definitions for runtime communication.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::Post;

/// What: Channels connecting the event loop to its background tasks.
///
/// Details:
/// - Terminal events arrive from the polling thread; fetch outcomes from the
///   post-store worker; ticks drive periodic redraws.
pub struct Channels {
    /// Sender handed to the terminal event thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Shutdown flag observed by the event thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Fetch requests into the post-store worker (initial load and retries).
    pub fetch_req_tx: mpsc::UnboundedSender<()>,
    /// Fetch outcomes: posts in backend order, or a display-ready message.
    pub fetch_res_rx: mpsc::UnboundedReceiver<Result<Vec<Post>, String>>,
    /// Redraw tick sender (kept for tests and future wakeups).
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Redraw ticks consumed by the event loop.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all runtime channels and spawn the fetch worker.
    ///
    /// Inputs:
    /// - `base_url`: Backend origin for the post-store worker
    ///
    /// Output:
    /// - A `Channels` bundle with the fetch worker already listening.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (fetch_req_tx, fetch_req_rx) = mpsc::unbounded_channel::<()>();
        let (fetch_res_tx, fetch_res_rx) =
            mpsc::unbounded_channel::<Result<Vec<Post>, String>>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();

        super::workers::spawn_fetch_worker(fetch_req_rx, fetch_res_tx, base_url);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            fetch_req_tx,
            fetch_res_rx,
            tick_tx,
            tick_rx,
        }
    }
}
