//! Bundle quality scoring.
//!
//! The score grades a finished bundle, not the caller's raw input. Seven
//! sub-scores are averaged and rounded:
//!
//! | Sub-score      | 100 when                    | else |
//! |----------------|-----------------------------|------|
//! | title          | 30 to 65 characters         | 60   |
//! | description    | 120 to 160 characters       | 70   |
//! | keywords       | non-empty                   | 0    |
//! | canonical      | starts with `http`          | 0    |
//! | og title       | non-empty                   | 0    |
//! | og description | non-empty                   | 0    |
//! | og image       | always                      | -    |

use super::{DESCRIPTION_RANGE, TITLE_RANGE};
use crate::domain::entities::{OptimizedSeo, ScoreBreakdown};
use crate::utils::text::char_len;

const FULL: u8 = 100;

/// Computes the per-field sub-scores and the rounded total.
pub fn score_breakdown(seo: &OptimizedSeo) -> ScoreBreakdown {
    let title = if TITLE_RANGE.contains(&char_len(&seo.title)) {
        FULL
    } else {
        60
    };
    let description = if DESCRIPTION_RANGE.contains(&char_len(&seo.description)) {
        FULL
    } else {
        70
    };
    let keywords = present(&seo.keywords);
    let canonical = if seo.canonical_url.starts_with("http") {
        FULL
    } else {
        0
    };
    let og_title = present(&seo.og_title);
    let og_description = present(&seo.og_description);
    let og_image = FULL;

    let sum: u32 = [
        title,
        description,
        keywords,
        canonical,
        og_title,
        og_description,
        og_image,
    ]
    .iter()
    .map(|&s| u32::from(s))
    .sum();

    // round(sum / 7), half up
    let total = ((sum * 2 + 7) / 14) as u8;

    ScoreBreakdown {
        title,
        description,
        keywords,
        canonical,
        og_title,
        og_description,
        og_image,
        total,
    }
}

/// Computes the 0 to 100 quality score of a bundle.
pub fn calculate_score(seo: &OptimizedSeo) -> u8 {
    score_breakdown(seo).total
}

fn present(value: &str) -> u8 {
    if value.is_empty() { 0 } else { FULL }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> OptimizedSeo {
        OptimizedSeo {
            title: "t".repeat(40),
            description: "d".repeat(140),
            keywords: "flight training".to_string(),
            og_title: "og".to_string(),
            og_description: "d".repeat(140),
            canonical_url: "https://personalwings.com".to_string(),
            score: 0,
        }
    }

    #[test]
    fn test_all_in_range_scores_100() {
        let breakdown = score_breakdown(&bundle());
        assert_eq!(breakdown.total, 100);
        assert_eq!(breakdown.og_image, 100);
    }

    #[test]
    fn test_description_out_of_range() {
        let mut seo = bundle();
        seo.description = "d".repeat(185);
        // (600 + 70) / 7 = 95.71
        assert_eq!(calculate_score(&seo), 96);
    }

    #[test]
    fn test_title_out_of_range() {
        let mut seo = bundle();
        seo.title = "short".to_string();
        // (600 + 60) / 7 = 94.29
        assert_eq!(calculate_score(&seo), 94);
    }

    #[test]
    fn test_title_and_description_out_of_range() {
        let mut seo = bundle();
        seo.title = "short".to_string();
        seo.description = String::new();
        // (500 + 60 + 70) / 7 = 90
        assert_eq!(calculate_score(&seo), 90);
    }

    #[test]
    fn test_relative_canonical_scores_zero() {
        let mut seo = bundle();
        seo.canonical_url = "/about".to_string();
        let breakdown = score_breakdown(&seo);
        assert_eq!(breakdown.canonical, 0);
        // 600 / 7 = 85.71
        assert_eq!(breakdown.total, 86);
    }

    #[test]
    fn test_everything_empty() {
        let seo = OptimizedSeo {
            title: String::new(),
            description: String::new(),
            keywords: String::new(),
            og_title: String::new(),
            og_description: String::new(),
            canonical_url: String::new(),
            score: 0,
        };
        // (60 + 70 + 100) / 7 = 32.86
        assert_eq!(calculate_score(&seo), 33);
    }

    #[test]
    fn test_range_boundaries() {
        let mut seo = bundle();
        seo.title = "t".repeat(30);
        seo.description = "d".repeat(160);
        assert_eq!(calculate_score(&seo), 100);

        seo.title = "t".repeat(66);
        assert_eq!(score_breakdown(&seo).title, 60);

        seo.description = "d".repeat(119);
        assert_eq!(score_breakdown(&seo).description, 70);
    }

    #[test]
    fn test_score_ignores_stored_score() {
        let mut seo = bundle();
        seo.score = 12;
        assert_eq!(calculate_score(&seo), 100);
    }
}
