//! Explicit state mutations for every user intent.
//!
//! Filter state is owned by [`AppState`] and changed only through these
//! handlers; each mutation that affects the view ends by re-running the
//! projection so the derived fields never go stale.

use tokio::sync::mpsc;

use crate::logic::refresh_projection;
use crate::state::{AppState, EmptyState, PAGE_STEP, Phase};

/// What: Translate a character caret index into a byte offset.
///
/// Inputs:
/// - `s`: Input text
/// - `char_idx`: Caret position in characters
///
/// Output:
/// - Byte offset of that character, or `s.len()` when past the end.
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(i, _)| i)
}

/// What: Activate a category filter (or clear it with `None`).
///
/// Inputs:
/// - `app`: Mutable application state
/// - `category`: New filter value; `None` selects "All"
///
/// Output:
/// - Updates the filter, resets the selection to the top, re-projects.
pub fn set_category(app: &mut AppState, category: Option<String>) {
    if app.active_category != category {
        app.active_category = category;
        app.selected = 0;
    }
    refresh_projection(app);
}

/// What: Clear the active category filter (the "View All" recovery action).
pub fn clear_category(app: &mut AppState) {
    set_category(app, None);
}

/// What: Step the active category through All and each facet in order.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `forward`: Direction of the cycle
///
/// Output:
/// - Activates the next (or previous) entry of `[All, facets...]`, wrapping.
///
/// Details:
/// - Facet order is first-appearance order of the fetched posts, matching
///   the on-screen filter row.
pub fn cycle_category(app: &mut AppState, forward: bool) {
    let names: Vec<Option<String>> = std::iter::once(None)
        .chain(
            app.category_counts
                .iter()
                .map(|c| Some(c.name.clone())),
        )
        .collect();
    if names.len() <= 1 {
        return;
    }
    let current = names
        .iter()
        .position(|n| *n == app.active_category)
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % names.len()
    } else {
        (current + names.len() - 1) % names.len()
    };
    set_category(app, names[next].clone());
}

/// What: Insert a character at the caret and re-filter live.
pub fn insert_char(app: &mut AppState, ch: char) {
    let at = byte_index(&app.input, app.caret);
    app.input.insert(at, ch);
    app.caret += 1;
    refresh_projection(app);
}

/// What: Delete the character before the caret and re-filter live.
pub fn delete_before_caret(app: &mut AppState) {
    if app.caret == 0 {
        return;
    }
    let from = byte_index(&app.input, app.caret - 1);
    let to = byte_index(&app.input, app.caret);
    app.input.replace_range(from..to, "");
    app.caret -= 1;
    refresh_projection(app);
}

/// What: Clear the search input entirely.
pub fn clear_query(app: &mut AppState) {
    app.input.clear();
    app.caret = 0;
    refresh_projection(app);
}

/// Move the caret one character left.
pub const fn move_caret_left(app: &mut AppState) {
    app.caret = app.caret.saturating_sub(1);
}

/// Move the caret one character right.
pub fn move_caret_right(app: &mut AppState) {
    let len = app.input.chars().count();
    if app.caret < len {
        app.caret += 1;
    }
}

/// Move the caret to the start of the input.
pub const fn move_caret_home(app: &mut AppState) {
    app.caret = 0;
}

/// Move the caret past the last character.
pub fn move_caret_end(app: &mut AppState) {
    app.caret = app.input.chars().count();
}

/// What: Move the list selection by a signed delta, clamped to the list.
pub fn move_selection(app: &mut AppState, delta: isize) {
    if app.displayed.is_empty() {
        return;
    }
    let last = app.displayed.len() - 1;
    let next = app
        .selected
        .saturating_add_signed(delta)
        .min(last);
    app.selected = next;
    app.list_state.select(Some(next));
}

/// What: Reveal the next page of matching posts.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - Grows `page_size` by the fixed step and re-projects; a no-op when the
///   matching set is already fully revealed. The page size never decreases.
pub fn load_more(app: &mut AppState) {
    if !app.has_more {
        return;
    }
    app.page_size += PAGE_STEP;
    refresh_projection(app);
}

/// What: The context action bound to Enter on the browsing surface.
///
/// Details:
/// - With the category-empty panel showing, Enter is "View All"; otherwise
///   it is "Load More" when more matching posts exist. The two can never be
///   visible at the same time.
pub fn primary_action(app: &mut AppState) {
    if matches!(app.empty_state, Some(EmptyState::CategoryEmpty)) {
        clear_category(app);
    } else if app.has_more {
        load_more(app);
    }
}

/// What: Re-issue the post-store fetch (user-initiated retry).
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_req_tx`: Request channel to the fetch worker
///
/// Output:
/// - Transitions to `Loading` and enqueues one request; a no-op while a
///   fetch is already outstanding, so concurrent fetches are never issued.
pub fn request_fetch(app: &mut AppState, fetch_req_tx: &mpsc::UnboundedSender<()>) {
    if matches!(app.phase, Phase::Loading) {
        return;
    }
    app.phase = Phase::Loading;
    let _ = fetch_req_tx.send(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::INITIAL_PAGE_SIZE;
    use crate::test_utils::post;

    fn ready_app() -> AppState {
        let mut app = AppState {
            phase: Phase::Ready,
            posts: (1..=10)
                .map(|i| {
                    let cat = if i <= 6 { "Tech" } else { "Design" };
                    post(i, &format!("Post {i}"), "body", "Rae", cat)
                })
                .collect(),
            ..Default::default()
        };
        refresh_projection(&mut app);
        app
    }

    #[test]
    /// What: Load-more grows the page by the fixed step and stops at the end
    ///
    /// - Input: 10 matching posts, two load-more actions
    /// - Output: 6 then 10 displayed; page size monotonically non-decreasing
    fn load_more_is_monotonic() {
        let mut app = ready_app();
        assert_eq!(app.displayed.len(), INITIAL_PAGE_SIZE);
        assert!(app.has_more);
        load_more(&mut app);
        assert_eq!(app.page_size, INITIAL_PAGE_SIZE + PAGE_STEP);
        assert_eq!(app.displayed.len(), 10);
        assert!(!app.has_more);
        // Further presses are no-ops
        load_more(&mut app);
        assert_eq!(app.page_size, INITIAL_PAGE_SIZE + PAGE_STEP);
    }

    #[test]
    /// What: Category cycling walks All -> facets -> All in both directions
    ///
    /// - Input: Two facets (Tech, Design)
    /// - Output: Forward reaches Tech then Design then wraps to All;
    ///   backward from All lands on Design
    fn cycle_category_wraps() {
        let mut app = ready_app();
        cycle_category(&mut app, true);
        assert_eq!(app.active_category.as_deref(), Some("Tech"));
        cycle_category(&mut app, true);
        assert_eq!(app.active_category.as_deref(), Some("Design"));
        cycle_category(&mut app, true);
        assert_eq!(app.active_category, None);
        cycle_category(&mut app, false);
        assert_eq!(app.active_category.as_deref(), Some("Design"));
    }

    #[test]
    /// What: Query editing maintains the caret over multi-byte characters
    ///
    /// - Input: Insertions including a non-ASCII char, then deletions
    /// - Output: Text and caret stay consistent; projection follows the text
    fn query_editing_tracks_caret() {
        let mut app = ready_app();
        insert_char(&mut app, 'p');
        insert_char(&mut app, 'ö');
        insert_char(&mut app, 's');
        assert_eq!(app.input, "pös");
        assert_eq!(app.caret, 3);
        move_caret_left(&mut app);
        delete_before_caret(&mut app);
        assert_eq!(app.input, "ps");
        assert_eq!(app.caret, 1);
        clear_query(&mut app);
        assert!(app.input.is_empty());
        assert_eq!(app.matching_total, 10);
    }

    #[test]
    /// What: Enter resolves to View-All on the category-empty panel and to
    /// load-more otherwise
    ///
    /// - Input: A category with no matches, then the unfiltered first page
    /// - Output: First press clears the filter; later press reveals more
    fn primary_action_is_contextual() {
        let mut app = ready_app();
        app.active_category = Some("Essays".to_string());
        refresh_projection(&mut app);
        assert_eq!(app.empty_state, Some(crate::state::EmptyState::CategoryEmpty));
        primary_action(&mut app);
        assert_eq!(app.active_category, None);
        assert!(app.has_more);
        primary_action(&mut app);
        assert_eq!(app.displayed.len(), 10);
    }

    #[test]
    /// What: Retry re-requests the fetch only from the error phase
    ///
    /// - Input: Error state, then an immediate second retry press
    /// - Output: One request enqueued; the second press is gated by Loading
    fn request_fetch_gates_concurrent_requests() {
        let mut app = ready_app();
        app.phase = Phase::Error {
            message: "HTTP error: 500".to_string(),
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        request_fetch(&mut app, &tx);
        assert_eq!(app.phase, Phase::Loading);
        request_fetch(&mut app, &tx);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Selection movement clamps at both ends
    ///
    /// - Input: Moves past the top and bottom of a 6-row page
    /// - Output: Selection stays within `[0, 5]`
    fn move_selection_clamps() {
        let mut app = ready_app();
        move_selection(&mut app, -3);
        assert_eq!(app.selected, 0);
        move_selection(&mut app, 100);
        assert_eq!(app.selected, 5);
        assert_eq!(app.list_state.selected(), Some(5));
    }
}
