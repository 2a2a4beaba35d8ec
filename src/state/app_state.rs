//! Central `AppState` container owned by the event loop.

use ratatui::widgets::ListState;

use crate::state::types::{CategoryCount, EmptyState, Modal, Phase, Post};

/// Number of posts revealed before the first "load more" action.
pub const INITIAL_PAGE_SIZE: usize = 6;

/// Increment applied to the page size by each "load more" action.
pub const PAGE_STEP: usize = 6;

/// Application state shared by the event, networking, and UI layers.
///
/// Mutated only on the event loop in response to input and fetch results.
/// Filter state (category, query, page size) is owned exclusively here and
/// changed through the handlers in [`crate::logic::actions`]; the derived
/// view fields are rewritten by [`crate::logic::refresh_projection`] after
/// every such change.
#[derive(Debug)]
pub struct AppState {
    /// Base URL of the backend serving the post-listing endpoint.
    pub base_url: String,
    /// Post store lifecycle: loading, ready, or a display-only error.
    pub phase: Phase,
    /// Full set of posts in backend order; read-only after the fetch.
    pub posts: Vec<Post>,
    /// Current search input text.
    pub input: String,
    /// Caret position within `input`, in characters.
    pub caret: usize,
    /// Active category filter; `None` means "All".
    pub active_category: Option<String>,
    /// Cumulative number of matching posts to reveal; never decreases.
    pub page_size: usize,
    /// Derived: paginated prefix of the matching set, in backend order.
    pub displayed: Vec<Post>,
    /// Derived: size of the full matching set.
    pub matching_total: usize,
    /// Derived: whether more matching posts exist beyond `displayed`.
    pub has_more: bool,
    /// Derived: facet counts over the full post set, first-appearance order.
    pub category_counts: Vec<CategoryCount>,
    /// Derived: which empty panel to show when nothing is displayed.
    pub empty_state: Option<EmptyState>,
    /// Index into `displayed` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the article list widget.
    pub list_state: ListState,
    /// Active modal dialog, if any.
    pub modal: Modal,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            phase: Phase::Loading,
            posts: Vec::new(),
            input: String::new(),
            caret: 0,
            active_category: None,
            page_size: INITIAL_PAGE_SIZE,
            displayed: Vec::new(),
            matching_total: 0,
            has_more: false,
            category_counts: Vec::new(),
            empty_state: None,
            selected: 0,
            list_state: ListState::default(),
            modal: Modal::None,
        }
    }
}

impl AppState {
    /// Total number of posts in the store; labels the "All" filter control.
    #[must_use]
    pub fn total_posts(&self) -> usize {
        self.posts.len()
    }
}
