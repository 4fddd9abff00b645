//! Character-aware text helpers shared by the field generators.
//!
//! All lengths are measured in `char`s so multi-byte content is never split
//! and a title of 65 accented letters counts as 65, not as its UTF-8 size.

use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Ellipsis appended to truncated fields.
pub const ELLIPSIS: &str = "...";

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Returns the first `n` characters of `s`.
pub fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Cuts `s` to `keep` characters and appends `"..."`.
///
/// The caller picks `keep` as `budget - 3` so the ellipsis fits the budget.
pub fn truncate_with_ellipsis(s: &str, keep: usize) -> String {
    let mut out = take_chars(s, keep).to_string();
    out.push_str(ELLIPSIS);
    out
}

/// Removes every `<...>` tag, collapses whitespace runs and trims the ends.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_html("<p>Fly   <b>high</b></p>\n"), "Fly high");
/// ```
pub fn clean_html(s: &str) -> String {
    let stripped = HTML_TAG_REGEX.replace_all(s, "");
    WHITESPACE_REGEX
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Returns the first non-blank value, treating `None` and `""` the same.
pub fn first_present<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.is_empty())
}
