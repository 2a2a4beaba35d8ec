//! Application state: value types and the central [`AppState`] container.

mod app_state;
mod types;

pub use app_state::{AppState, INITIAL_PAGE_SIZE, PAGE_STEP};
pub use types::{CategoryCount, EmptyState, Modal, Phase, Post};
