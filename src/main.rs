//! Postdeck binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use postdeck::args::Args;
use postdeck::{app, theme};

struct PostdeckTimer;

impl tracing_subscriber::fmt::time::FormatTime for PostdeckTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize the tracing logger writing to the postdeck log file.
///
/// Inputs:
/// - `filter_override`: Optional filter from `--log-filter`; otherwise the
///   environment filter applies, defaulting to `info`.
///
/// Details:
/// - Falls back to a stderr logger when the log file cannot be opened so
///   startup never blocks on logging.
fn init_logging(filter_override: Option<&str>) {
    let env_filter = filter_override.map_or_else(
        || {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        },
        tracing_subscriber::EnvFilter::new,
    );

    let mut log_path = theme::logs_dir();
    log_path.push("postdeck.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PostdeckTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .with_timer(PostdeckTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.log_filter.as_deref());

    tracing::info!(url = %args.url, "postdeck starting");
    if let Err(err) = app::run(args.url).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("postdeck exited");
}
