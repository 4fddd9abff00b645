//! Meta description generation.

use super::DESCRIPTION_RANGE;
use crate::domain::entities::ContentInput;
use crate::utils::text::{char_len, clean_html, first_present, take_chars, truncate_with_ellipsis};

/// Appended once to descriptions under 120 characters.
const SHORT_SUFFIX: &str =
    " Professional aviation training and flight instruction for aspiring pilots worldwide.";

/// Appended, as far as it fits, to descriptions between 120 and 150 characters.
const FILL_SUFFIX: &str = " Learn more with Personal Wings.";

/// Descriptions longer than this are left alone if they still fit the maximum.
const FILL_LIMIT: usize = 150;

/// Builds a meta description from the content.
///
/// The seed is `description`, else `subtitle`, else `title`, with HTML tags
/// removed and whitespace collapsed. Then, by cleaned length:
///
/// - under 120: [`SHORT_SUFFIX`] is appended once and the result is not
///   re-checked, so seeds of 76 to 119 characters come out longer than 160
/// - over 160: cut to 157 characters plus `"..."`
/// - 151 to 160: unchanged
/// - 120 to 150: as much of [`FILL_SUFFIX`] as fits in 160
pub fn generate_description(content: &ContentInput) -> String {
    let seed = first_present(&[content.description(), content.subtitle(), content.title()])
        .unwrap_or_default();
    let description = clean_html(seed);

    let len = char_len(&description);
    let min = *DESCRIPTION_RANGE.start();
    let max = *DESCRIPTION_RANGE.end();

    if len < min {
        return format!("{description}{SHORT_SUFFIX}");
    }

    if len > max {
        return truncate_with_ellipsis(&description, max - 3);
    }

    if len > FILL_LIMIT {
        return description;
    }

    let fill = take_chars(FILL_SUFFIX, max - len);
    format!("{description}{fill}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(text: &str) -> String {
        generate_description(&ContentInput {
            description: Some(text.to_string()),
            ..ContentInput::default()
        })
    }

    #[test]
    fn test_empty_input_yields_bare_suffix() {
        let description = generate_description(&ContentInput::default());
        assert_eq!(description, SHORT_SUFFIX);
        assert!(description.starts_with(' '));
        assert_eq!(char_len(&description), 85);
    }

    #[test]
    fn test_short_description_gets_suffix() {
        let description = describe("Learn to fly.");
        assert_eq!(description, format!("Learn to fly.{SHORT_SUFFIX}"));
    }

    #[test]
    fn test_short_branch_overshoots_160() {
        let description = describe(&"d".repeat(100));
        assert_eq!(char_len(&description), 100 + char_len(SHORT_SUFFIX));
        assert!(char_len(&description) > 160);
    }

    #[test]
    fn test_long_description_truncated_to_160() {
        let description = describe(&"w".repeat(300));
        assert_eq!(char_len(&description), 160);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_upper_band_unchanged() {
        let text = "u".repeat(155);
        assert_eq!(describe(&text), text);

        let text = "u".repeat(160);
        assert_eq!(describe(&text), text);
    }

    #[test]
    fn test_fill_band_full_suffix() {
        let text = "f".repeat(120);
        assert_eq!(describe(&text), format!("{text}{FILL_SUFFIX}"));
    }

    #[test]
    fn test_fill_band_partial_suffix() {
        let text = "f".repeat(140);
        let description = describe(&text);
        assert_eq!(char_len(&description), 160);
        assert_eq!(description, format!("{text} Learn more with Per"));
    }

    #[test]
    fn test_fill_band_at_150() {
        let description = describe(&"f".repeat(150));
        assert_eq!(char_len(&description), 160);
        assert!(description.ends_with(" Learn mor"));
    }

    #[test]
    fn test_html_is_stripped() {
        let description = describe("<p>Solo   flight\n<strong>today</strong></p>");
        assert!(description.starts_with("Solo flight today "));
        assert!(!description.contains('<'));
    }

    #[test]
    fn test_subtitle_then_title_fallback() {
        let input = ContentInput {
            title: Some("Title text".to_string()),
            subtitle: Some("Subtitle text".to_string()),
            ..ContentInput::default()
        };
        assert!(generate_description(&input).starts_with("Subtitle text "));

        let input = ContentInput::with_title("Title text");
        assert!(generate_description(&input).starts_with("Title text "));
    }

    #[test]
    fn test_markup_only_description_falls_to_suffix() {
        let description = describe("<br><br>");
        assert_eq!(description, SHORT_SUFFIX);
    }
}
