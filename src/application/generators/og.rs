//! Open Graph title and description generation.

use super::{BRAND_NAME, OG_TITLE_MAX, generate_description};
use crate::domain::entities::ContentInput;
use crate::utils::text::{char_len, first_present, truncate_with_ellipsis};

const OG_BRAND_SUFFIX: &str = " | Personal Wings";

/// Seeds shorter than this get the brand suffix.
const OG_BRAND_SEED_LIMIT: usize = 40;

/// Builds the `og:title` value, at most 70 characters.
///
/// Unlike the page title, the category is never appended.
pub fn generate_og_title(content: &ContentInput) -> String {
    let seed = first_present(&[content.title(), content.subtitle()]).unwrap_or(BRAND_NAME);
    let mut title = seed.to_string();

    if char_len(&title) < OG_BRAND_SEED_LIMIT {
        title.push_str(OG_BRAND_SUFFIX);
    }

    if char_len(&title) > OG_TITLE_MAX {
        title = truncate_with_ellipsis(&title, OG_TITLE_MAX - 3);
    }

    title
}

/// Builds the `og:description` value; always identical to the meta description.
pub fn generate_og_description(content: &ContentInput) -> String {
    generate_description(content)
}
