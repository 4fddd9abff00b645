//! Keyword list generation.

use super::MAX_KEYWORDS;
use crate::domain::entities::ContentInput;
use crate::utils::text::char_len;

/// Always present, always first.
pub const BASE_KEYWORDS: [&str; 4] = [
    "flight training",
    "aviation training",
    "pilot training",
    "flight school",
];

/// Title words never promoted to keywords.
const TITLE_STOP_WORDS: &[&str] = &["about", "learn", "discover"];

const MAX_TITLE_WORDS: usize = 3;

/// Builds the `", "`-joined keyword list.
///
/// Order: base keywords, then tags as given, then the lower-cased category,
/// then up to three lower-cased title words longer than four characters.
/// Duplicates are dropped keeping the first occurrence (case-sensitive) and
/// the list is capped at ten entries.
pub fn generate_keywords(content: &ContentInput) -> String {
    let tags = content.tags().iter().cloned();

    let category = content.category().map(str::to_lowercase);

    let candidates = BASE_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .chain(tags)
        .chain(category)
        .chain(title_keywords(content.title().unwrap_or_default()));

    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
    for candidate in candidates {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if !keywords.contains(&candidate) {
            keywords.push(candidate);
        }
    }

    keywords.join(", ")
}

/// First three significant words of a title, lower-cased.
fn title_keywords(title: &str) -> Vec<String> {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| char_len(w) > 4 && !TITLE_STOP_WORDS.contains(&w.as_str()))
        .take(MAX_TITLE_WORDS)
        .collect()
}
