//! Post store networking: the single fetch against the blog backend.

use std::sync::LazyLock;
use std::time::Duration;

use tracing::{info, warn};

use crate::state::Post;

/// Result type alias for post store operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Path of the public post-listing endpoint on the backend.
pub const BLOGS_ENDPOINT: &str = "/api/public/blogs";

/// Shared HTTP client with connection pooling for backend requests.
/// Connection pooling is enabled by default in `reqwest::Client`.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("postdeck/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// What: Join the backend base URL with the post-listing endpoint path.
///
/// Inputs:
/// - `base_url`: Backend origin, with or without a trailing slash
///
/// Output:
/// - Full endpoint URL with exactly one slash at the join point.
#[must_use]
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{BLOGS_ENDPOINT}", base_url.trim_end_matches('/'))
}

/// What: Fetch the full post list from the backend.
///
/// Inputs:
/// - `base_url`: Backend origin (e.g. `http://localhost:8080`)
///
/// Output:
/// - `Ok(Vec<Post>)` in backend order on success.
///
/// # Errors
/// - `Err` with a human-readable message when the request fails to send,
///   the server answers with a non-2xx status, or the body is not a JSON
///   array of post objects. The message is what the error panel displays.
pub async fn fetch_posts(base_url: &str) -> Result<Vec<Post>> {
    let url = endpoint_url(base_url);
    let response = HTTP_CLIENT.get(&url).send().await.map_err(|e| {
        warn!(error = %e, %url, "failed to reach blog backend");
        Box::<dyn std::error::Error + Send + Sync>::from(format!("Network error: {e}"))
    })?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        warn!(%status, %url, "blog backend returned an error status");
        return Err(format!("HTTP error: {status}").into());
    }

    let body = response.text().await.map_err(|e| {
        warn!(error = %e, %url, "failed to read blog listing body");
        Box::<dyn std::error::Error + Send + Sync>::from(format!("Failed to read response: {e}"))
    })?;

    let posts: Vec<Post> = serde_json::from_str(&body).map_err(|e| {
        warn!(error = %e, %url, "blog listing body is not a post array");
        Box::<dyn std::error::Error + Send + Sync>::from(format!("Invalid response body: {e}"))
    })?;

    info!(%url, count = posts.len(), "fetched blog posts");
    Ok(posts)
}
