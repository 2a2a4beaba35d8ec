//! Application runtime: terminal lifecycle, channels, and the event loop.

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::logic::refresh_projection;
use crate::state::{AppState, Phase, Post};
use crate::ui::ui;

mod channels;
mod terminal;
mod workers;

pub use channels::Channels;

use terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Apply a post-store fetch outcome to the application state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `res`: Posts in backend order, or the failure message
///
/// Output:
/// - Transitions `Loading → Ready` (store populated) or `Loading → Error`
///   (store left empty), then re-projects the view.
pub fn handle_fetch_result(app: &mut AppState, res: std::result::Result<Vec<Post>, String>) {
    match res {
        Ok(posts) => {
            tracing::info!(count = posts.len(), "post store ready");
            app.posts = posts;
            app.phase = Phase::Ready;
        }
        Err(message) => {
            tracing::warn!(error = %message, "post store entered error state");
            app.posts.clear();
            app.phase = Phase::Error { message };
        }
    }
    refresh_projection(app);
}

/// What: Run the postdeck TUI end-to-end: initialize the terminal and state,
/// spawn background tasks (fetch worker, event thread, tick), drive the
/// event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `base_url`: Backend origin serving the post-listing endpoint
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal
///   errors.
///
/// Details:
/// - The store fetch is requested exactly once at startup; further requests
///   only happen through the user retry action on the error screen.
/// - Headless mode (`POSTDECK_TEST_HEADLESS=1`) skips terminal setup and
///   rendering so integration tests can drive the loop.
pub async fn run(base_url: String) -> Result<()> {
    let headless = std::env::var("POSTDECK_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut term = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState {
        base_url: base_url.clone(),
        ..Default::default()
    };

    let mut channels = Channels::new(base_url);
    workers::spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    workers::spawn_tick_worker(channels.tick_tx.clone());

    // The one fetch per store lifetime; AppState starts in Loading.
    let _ = channels.fetch_req_tx.send(());

    loop {
        if let Some(t) = term.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &channels.fetch_req_tx) {
                    break;
                }
            }
            Some(res) = channels.fetch_res_rx.recv() => {
                handle_fetch_result(&mut app, res);
            }
            Some(()) = channels.tick_rx.recv() => {}
            else => break,
        }
    }

    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
