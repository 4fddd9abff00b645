//! Page title generation.

use super::{BRAND_NAME, TITLE_RANGE};
use crate::domain::entities::ContentInput;
use crate::utils::text::{char_len, first_present, truncate_with_ellipsis};

/// Appended to titles that are still shorter than the minimum.
const TITLE_SUFFIX: &str = " - Personal Wings Aviation Training";

/// Seeds at or above this length do not get the category appended.
const CATEGORY_SEED_LIMIT: usize = 40;

/// Builds a page title within 30 to 65 characters.
///
/// # Algorithm
///
/// 1. Seed with `title`, else `subtitle`, else `"Personal Wings"`
/// 2. Append `" | {category}"` when a category is set and the seed is under 40 characters
/// 3. Append `" - Personal Wings Aviation Training"` while under 30 characters
/// 4. Over 65 characters: keep 62 and add `"..."`
///
/// `_site_url` is part of the generator signature but does not affect titles.
pub fn generate_title(content: &ContentInput, _site_url: &str) -> String {
    let seed = first_present(&[content.title(), content.subtitle()]).unwrap_or(BRAND_NAME);
    let mut title = seed.to_string();

    if let Some(category) = content.category()
        && char_len(seed) < CATEGORY_SEED_LIMIT
    {
        title.push_str(" | ");
        title.push_str(category);
    }

    if char_len(&title) < *TITLE_RANGE.start() {
        title.push_str(TITLE_SUFFIX);
    }

    let max = *TITLE_RANGE.end();
    if char_len(&title) > max {
        title = truncate_with_ellipsis(&title, max - 3);
    }

    title
}
