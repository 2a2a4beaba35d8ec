//! Integration test for the post-store fetch worker plumbing: a request on
//! the channel yields exactly one outcome, and failures arrive as
//! display-ready messages rather than panics.

use std::time::Duration;

use postdeck::app::Channels;
use postdeck::app::handle_fetch_result;
use postdeck::state::{AppState, Phase};

#[tokio::test]
async fn unreachable_backend_reports_fetch_failure() {
    // Port 9 (discard) is closed on any sane test host, so the connection is
    // refused quickly instead of timing out.
    let mut channels = Channels::new("http://127.0.0.1:9".to_string());
    channels.fetch_req_tx.send(()).expect("worker listening");

    let res = tokio::time::timeout(Duration::from_secs(20), channels.fetch_res_rx.recv())
        .await
        .expect("worker answered in time")
        .expect("channel open");
    let message = res.expect_err("unreachable backend must fail");
    assert!(message.contains("Network error"), "got: {message}");

    // The failure drives the store into the retryable error state
    let mut app = AppState::default();
    handle_fetch_result(&mut app, Err(message));
    assert!(matches!(app.phase, Phase::Error { .. }));
}
