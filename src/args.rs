//! Command-line argument parsing.

use clap::Parser;

/// Command-line surface for the postdeck binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "postdeck",
    version,
    about = "Browse a blog's articles in the terminal with live search and category filters"
)]
pub struct Args {
    /// Base URL of the blog backend serving /api/public/blogs.
    #[arg(long, default_value = "http://localhost:8080")]
    pub url: String,

    /// Tracing filter override (e.g. "debug" or "postdeck=trace").
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults apply when no flags are given
    ///
    /// - Input: Bare invocation
    /// - Output: Default backend URL, no filter override
    fn defaults_apply() {
        let args = Args::parse_from(["postdeck"]);
        assert_eq!(args.url, "http://localhost:8080");
        assert!(args.log_filter.is_none());
    }

    #[test]
    /// What: Flags override the defaults
    ///
    /// - Input: `--url` and `--log-filter`
    /// - Output: Parsed values
    fn flags_override() {
        let args = Args::parse_from([
            "postdeck",
            "--url",
            "https://blog.example.com",
            "--log-filter",
            "debug",
        ]);
        assert_eq!(args.url, "https://blog.example.com");
        assert_eq!(args.log_filter.as_deref(), Some("debug"));
    }
}
