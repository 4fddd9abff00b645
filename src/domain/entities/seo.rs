//! SEO metadata bundles.

use serde::{Deserialize, Serialize};

/// Fully populated SEO metadata for one page or section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedSeo {
    pub title: String,
    pub description: String,
    /// Comma-and-space separated, at most ten entries.
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub canonical_url: String,
    /// Quality score, 0 to 100 inclusive.
    pub score: u8,
}

/// SEO metadata a caller already holds, possibly incomplete.
///
/// Input to [`crate::application::services::optimize_existing_seo`], which
/// keeps every acceptable field and regenerates the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExistingSeo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub canonical_url: Option<String>,
}

impl From<OptimizedSeo> for ExistingSeo {
    fn from(seo: OptimizedSeo) -> Self {
        Self {
            title: Some(seo.title),
            description: Some(seo.description),
            keywords: Some(seo.keywords),
            og_title: Some(seo.og_title),
            og_description: Some(seo.og_description),
            canonical_url: Some(seo.canonical_url),
        }
    }
}

/// Per-field sub-scores behind a bundle's final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub title: u8,
    pub description: u8,
    pub keywords: u8,
    pub canonical: u8,
    pub og_title: u8,
    pub og_description: u8,
    /// Always 100; bundles carry no image yet.
    pub og_image: u8,
    pub total: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimized_seo_serializes_camel_case() {
        let seo = OptimizedSeo {
            title: "t".to_string(),
            description: "d".to_string(),
            keywords: "k".to_string(),
            og_title: "ot".to_string(),
            og_description: "od".to_string(),
            canonical_url: "https://personalwings.com".to_string(),
            score: 96,
        };

        let json = serde_json::to_value(&seo).unwrap();
        assert_eq!(json["ogTitle"], "ot");
        assert_eq!(json["canonicalUrl"], "https://personalwings.com");
        assert_eq!(json["score"], 96);
    }

    #[test]
    fn test_existing_seo_accepts_partial_json() {
        let existing: ExistingSeo =
            serde_json::from_str(r#"{"title":"Kept","ogDescription":""}"#).unwrap();

        assert_eq!(existing.title.as_deref(), Some("Kept"));
        assert_eq!(existing.og_description.as_deref(), Some(""));
        assert!(existing.keywords.is_none());
    }
}
