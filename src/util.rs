//! Small display helpers shared by the UI layer.
//!
//! Intentionally lightweight; these run on every frame for every visible
//! list row.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Format a backend date string for display.
///
/// Inputs:
/// - `raw`: Date as delivered by the API, expected to start with
///   `YYYY-MM-DD` (plain or RFC 3339).
///
/// Output:
/// - `"Jan 5, 2026"`-style text; the raw input when it does not parse;
///   empty for empty input.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let head = raw.get(..10).unwrap_or(raw);
    chrono::NaiveDate::parse_from_str(head, "%Y-%m-%d").map_or_else(
        |_| raw.to_string(),
        |d| d.format("%b %-d, %Y").to_string(),
    )
}

/// What: Truncate a string to a maximum display width, appending an ellipsis.
///
/// Inputs:
/// - `s`: Text to truncate
/// - `max`: Maximum display columns, including the ellipsis
///
/// Output:
/// - The input unchanged when it fits; otherwise a prefix plus `…` that
///   occupies at most `max` columns.
///
/// Details:
/// - Measures display columns, not bytes or chars, so wide characters do
///   not overflow the column limit.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let limit = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Date formatting handles plain dates, RFC 3339, and junk
    ///
    /// - Input: `2026-01-05`, an RFC 3339 timestamp, junk, empty
    /// - Output: Human form for parseable inputs, passthrough otherwise
    fn format_date_variants() {
        assert_eq!(format_date("2026-01-05"), "Jan 5, 2026");
        assert_eq!(format_date("2025-12-31T08:30:00Z"), "Dec 31, 2025");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    /// What: Truncation respects display width and marks the cut
    ///
    /// - Input: Short text, long text, and wide CJK characters
    /// - Output: Short text unchanged; cuts end with `…` within the limit
    fn truncate_to_width_behavior() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("a very long excerpt indeed", 10);
        assert!(cut.ends_with('…'));
        assert!(UnicodeWidthStr::width(cut.as_str()) <= 10);
        let wide = truncate_to_width("日本語のテキスト", 7);
        assert!(wide.ends_with('…'));
        assert!(UnicodeWidthStr::width(wide.as_str()) <= 7);
    }
}
