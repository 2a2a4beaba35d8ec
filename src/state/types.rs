//! Core value types used by postdeck state.

/// A single blog article as returned by the backend.
///
/// Posts are immutable once fetched; nothing is created, mutated, or deleted
/// client-side. The four text fields (`title`, `excerpt`, `author`,
/// `category`) participate in search matching; `date` and `image` are
/// rendering-only and may be absent in the payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    /// Backend identifier.
    #[serde(default)]
    pub id: u64,
    /// Article title.
    pub title: String,
    /// Short body preview shown in the list.
    pub excerpt: String,
    /// Author display name.
    pub author: String,
    /// Free-form category label used for faceted filtering.
    pub category: String,
    /// Publication date as reported by the backend (display only).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    /// Cover image URL (display only, unused in the terminal renderer).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
}

/// Lifecycle of the post store.
///
/// There is exactly one fetch per store lifetime; a user-initiated retry
/// re-enters `Loading` from `Error`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// The initial fetch (or a retry) is outstanding.
    #[default]
    Loading,
    /// Posts are loaded and the browsing surface is active.
    Ready,
    /// The fetch failed; carries a human-readable message.
    Error {
        /// Why the fetch failed (network, status, or decode error).
        message: String,
    },
}

/// Facet entry for one distinct category value across the full post set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category label as it appears on posts.
    pub name: String,
    /// Number of posts in the full (unfiltered) set carrying this label.
    pub count: usize,
}

/// Which informational empty panel to show when nothing is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing matches while a category filter is active; offers a
    /// reset-to-all recovery action.
    CategoryEmpty,
    /// Nothing visible with no category active; informational only.
    NoPosts,
}

/// Active modal dialog, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Keybinding help overlay.
    Help,
}
