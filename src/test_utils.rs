//! Shared helpers for unit tests.

#[cfg(test)]
use crate::state::Post;

#[cfg(test)]
/// What: Build a post with the four searchable fields and a derived date.
///
/// Inputs: identifier plus title/excerpt/author/category text
///
/// Output: `Post` with `date` set and `image` empty
pub fn post(id: u64, title: &str, excerpt: &str, author: &str, category: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        date: format!("2026-01-{:02}", (id % 28) + 1),
        image: String::new(),
    }
}
