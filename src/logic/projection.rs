use crate::state::{AppState, CategoryCount, EmptyState, Post};

/// Derived view over the post store for one combination of filter inputs.
///
/// Produced by [`project`]; the fields mirror the derived slots on
/// [`AppState`] that [`refresh_projection`] rewrites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    /// First `page_size` posts of the matching set, in backend order.
    pub displayed: Vec<Post>,
    /// Size of the full matching set.
    pub matching_total: usize,
    /// Whether matching posts remain beyond the displayed prefix.
    pub has_more: bool,
    /// Facet counts over the FULL post set, first-appearance order.
    pub category_counts: Vec<CategoryCount>,
    /// Empty panel to show, when nothing is displayed.
    pub empty_state: Option<EmptyState>,
}

/// What: Check whether a post matches a lowercased, non-empty search needle.
///
/// Inputs:
/// - `post`: Candidate post
/// - `needle`: Already-trimmed, already-lowercased query text
///
/// Output:
/// - `true` when the needle occurs in the lowercased title, excerpt, author,
///   or category.
fn matches_query(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.excerpt.to_lowercase().contains(needle)
        || post.author.to_lowercase().contains(needle)
        || post.category.to_lowercase().contains(needle)
}

/// What: Compute the displayed view from the post store and filter inputs.
///
/// Inputs:
/// - `posts`: Full post set in backend order
/// - `active_category`: Category filter; `None` means "All"
/// - `query`: Raw search text; blank or whitespace-only means "no search"
/// - `page_size`: Number of matching posts to reveal
///
/// Output:
/// - A [`Projection`] whose `displayed` is a prefix of the matching set of
///   length `min(page_size, matching_total)`, preserving backend order.
///
/// Details:
/// - A post matches when the category filter is unset or equal to its
///   category, AND the query is blank or a case-insensitive substring of any
///   of its four text fields.
/// - Facet counts are taken over the full set, not the matching set, so the
///   filter controls keep stable labels while searching.
/// - Pure: identical inputs always yield identical output.
#[must_use]
pub fn project(
    posts: &[Post],
    active_category: Option<&str>,
    query: &str,
    page_size: usize,
) -> Projection {
    let needle = query.trim().to_lowercase();
    let mut matching_total = 0usize;
    let mut displayed: Vec<Post> = Vec::new();
    for post in posts {
        let category_ok = active_category.is_none_or(|c| post.category == c);
        let query_ok = needle.is_empty() || matches_query(post, &needle);
        if category_ok && query_ok {
            matching_total += 1;
            if displayed.len() < page_size {
                displayed.push(post.clone());
            }
        }
    }

    let mut category_counts: Vec<CategoryCount> = Vec::new();
    for post in posts {
        if let Some(entry) = category_counts
            .iter_mut()
            .find(|entry| entry.name == post.category)
        {
            entry.count += 1;
        } else {
            category_counts.push(CategoryCount {
                name: post.category.clone(),
                count: 1,
            });
        }
    }

    let has_more = displayed.len() < matching_total;
    // The two empty panels are distinguished by the category filter alone; a
    // blank-out caused purely by the search query shares the no-filter panel.
    let empty_state = if displayed.is_empty() {
        Some(if active_category.is_some() {
            EmptyState::CategoryEmpty
        } else {
            EmptyState::NoPosts
        })
    } else {
        None
    };

    Projection {
        displayed,
        matching_total,
        has_more,
        category_counts,
        empty_state,
    }
}

/// What: Recompute the derived view on `app` and clamp the list selection.
///
/// Inputs:
/// - `app`: Mutable application state carrying the store and filter inputs
///
/// Output:
/// - Rewrites `displayed`, `matching_total`, `has_more`, `category_counts`,
///   and `empty_state`; selection is clamped into the new list or cleared
///   when the list is empty.
pub fn refresh_projection(app: &mut AppState) {
    let view = project(
        &app.posts,
        app.active_category.as_deref(),
        &app.input,
        app.page_size,
    );
    app.displayed = view.displayed;
    app.matching_total = view.matching_total;
    app.has_more = view.has_more;
    app.category_counts = view.category_counts;
    app.empty_state = view.empty_state;
    if app.displayed.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
    } else {
        app.selected = app.selected.min(app.displayed.len() - 1);
        app.list_state.select(Some(app.selected));
    }
}
