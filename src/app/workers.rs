//! Background tasks: the post-store fetch worker, the terminal event
//! thread, and the redraw tick.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::sources;
use crate::state::Post;

/// What: Spawn the post-store fetch worker.
///
/// Inputs:
/// - `fetch_req_rx`: Channel receiver for fetch requests (initial load and
///   user retries)
/// - `fetch_res_tx`: Channel sender for fetch outcomes
/// - `base_url`: Backend origin to query
///
/// Details:
/// - Each request performs exactly one GET; the event loop gates requests so
///   at most one is outstanding at a time.
/// - Failures are reported as display-ready message strings, never panics.
pub fn spawn_fetch_worker(
    mut fetch_req_rx: mpsc::UnboundedReceiver<()>,
    fetch_res_tx: mpsc::UnboundedSender<Result<Vec<Post>, String>>,
    base_url: String,
) {
    tokio::spawn(async move {
        while fetch_req_rx.recv().await.is_some() {
            match sources::fetch_posts(&base_url).await {
                Ok(posts) => {
                    let _ = fetch_res_tx.send(Ok(posts));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "blog fetch failed");
                    let _ = fetch_res_tx.send(Err(e.to_string()));
                }
            }
        }
    });
}

/// What: Spawn the event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Atomic flag to signal thread shutdown
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is observed promptly
///   instead of blocking in `read` forever.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read() {
                        if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                            break;
                        }
                        // Receiver dropped means the app is exiting
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// What: Spawn the redraw tick worker (200ms cadence).
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}
