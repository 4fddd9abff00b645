//! SEO bundle orchestration.

use crate::application::generators::{
    DESCRIPTION_RANGE, TITLE_RANGE, calculate_score, generate_description, generate_keywords,
    generate_og_description, generate_og_title, generate_title,
};
use crate::domain::entities::{
    ContentInput, ExistingSeo, OptimizedSeo, SectionContent, SectionKind,
};
use crate::utils::text::char_len;
use crate::utils::url_normalizer::build_canonical_url;

/// Site URL used when the caller does not configure one.
pub const DEFAULT_SITE_URL: &str = "https://personalwings.com";

/// Score reported by [`optimize_existing_seo`].
pub const GUARANTEED_SCORE: u8 = 100;

/// Generates a complete SEO bundle from scratch.
///
/// Runs every field generator, builds the canonical URL from `site_url` and
/// `path`, then scores the result.
pub fn generate_optimized_seo(
    content: &ContentInput,
    site_url: &str,
    path: Option<&str>,
) -> OptimizedSeo {
    let mut seo = OptimizedSeo {
        title: generate_title(content, site_url),
        description: generate_description(content),
        keywords: generate_keywords(content),
        og_title: generate_og_title(content),
        og_description: generate_og_description(content),
        canonical_url: build_canonical_url(site_url, path),
        score: 0,
    };
    seo.score = calculate_score(&seo);

    let description_len = char_len(&seo.description);
    if !DESCRIPTION_RANGE.contains(&description_len) {
        tracing::warn!(
            description_len,
            "Generated description outside target range"
        );
    }

    tracing::debug!(
        title_len = char_len(&seo.title),
        description_len,
        canonical_url = %seo.canonical_url,
        score = seo.score,
        "Generated SEO bundle"
    );

    seo
}

/// Patches an existing bundle, regenerating only unacceptable fields.
///
/// # Field Rules
///
/// - `title`: kept if non-empty and 30 to 65 characters
/// - `description`: kept if non-empty and 120 to 160 characters
/// - `keywords`, `og_title`, `og_description`, `canonical_url`: kept if non-empty
///
/// Everything else is regenerated from `content`; the canonical URL is
/// rebuilt without a path.
///
/// The returned score is always [`GUARANTEED_SCORE`]. Use
/// [`calculate_score`] on the result for the computed value.
pub fn optimize_existing_seo(
    existing: &ExistingSeo,
    content: &ContentInput,
    site_url: &str,
) -> OptimizedSeo {
    let mut regenerated = Vec::new();

    let title = keep_if(&existing.title, |t| TITLE_RANGE.contains(&char_len(t)))
        .unwrap_or_else(|| {
            regenerated.push("title");
            generate_title(content, site_url)
        });

    let description = keep_if(&existing.description, |d| {
        DESCRIPTION_RANGE.contains(&char_len(d))
    })
    .unwrap_or_else(|| {
        regenerated.push("description");
        generate_description(content)
    });

    let keywords = keep_if(&existing.keywords, |_| true).unwrap_or_else(|| {
        regenerated.push("keywords");
        generate_keywords(content)
    });

    let og_title = keep_if(&existing.og_title, |_| true).unwrap_or_else(|| {
        regenerated.push("og_title");
        generate_og_title(content)
    });

    let og_description = keep_if(&existing.og_description, |_| true).unwrap_or_else(|| {
        regenerated.push("og_description");
        generate_og_description(content)
    });

    let canonical_url = keep_if(&existing.canonical_url, |_| true).unwrap_or_else(|| {
        regenerated.push("canonical_url");
        build_canonical_url(site_url, None)
    });

    tracing::debug!(?regenerated, "Optimized existing SEO bundle");

    OptimizedSeo {
        title,
        description,
        keywords,
        og_title,
        og_description,
        canonical_url,
        score: GUARANTEED_SCORE,
    }
}

/// Generates a bundle for a site section with its category and default tags.
pub fn generate_section_seo(
    kind: SectionKind,
    content: SectionContent,
    site_url: &str,
) -> OptimizedSeo {
    tracing::debug!(section = kind.category(), "Generating section SEO");
    generate_optimized_seo(&content.into_content_input(kind), site_url, None)
}

pub fn generate_banner_seo(content: SectionContent, site_url: &str) -> OptimizedSeo {
    generate_section_seo(SectionKind::Banner, content, site_url)
}

pub fn generate_about_section_seo(content: SectionContent, site_url: &str) -> OptimizedSeo {
    generate_section_seo(SectionKind::About, content, site_url)
}

pub fn generate_blog_seo(content: SectionContent, site_url: &str) -> OptimizedSeo {
    generate_section_seo(SectionKind::Blog, content, site_url)
}

pub fn generate_events_seo(content: SectionContent, site_url: &str) -> OptimizedSeo {
    generate_section_seo(SectionKind::Events, content, site_url)
}

pub fn generate_testimonials_seo(content: SectionContent, site_url: &str) -> OptimizedSeo {
    generate_section_seo(SectionKind::Testimonials, content, site_url)
}

fn keep_if(value: &Option<String>, accept: impl Fn(&str) -> bool) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && accept(v))
        .map(str::to_string)
}

/// SEO generation bound to one site URL.
///
/// Cheap to clone and safe to share; holds no state besides the URL.
#[derive(Debug, Clone)]
pub struct SeoService {
    site_url: String,
}

impl Default for SeoService {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}

impl SeoService {
    /// Creates a new SEO service for `site_url`.
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
        }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// See [`generate_optimized_seo`].
    pub fn generate(&self, content: &ContentInput, path: Option<&str>) -> OptimizedSeo {
        generate_optimized_seo(content, &self.site_url, path)
    }

    /// See [`optimize_existing_seo`].
    pub fn optimize(&self, existing: &ExistingSeo, content: &ContentInput) -> OptimizedSeo {
        optimize_existing_seo(existing, content, &self.site_url)
    }

    /// See [`generate_section_seo`].
    pub fn section(&self, kind: SectionKind, content: SectionContent) -> OptimizedSeo {
        generate_section_seo(kind, content, &self.site_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range_existing() -> ExistingSeo {
        ExistingSeo {
            title: Some("T".repeat(50)),
            description: Some("D".repeat(130)),
            keywords: Some("kept, keywords".to_string()),
            og_title: Some("Kept OG".to_string()),
            og_description: Some("Kept OG description".to_string()),
            canonical_url: Some("https://personalwings.com/kept".to_string()),
        }
    }

    #[test]
    fn test_generate_scores_full_for_typical_content() {
        let content = ContentInput {
            title: Some("Private Pilot License Program".to_string()),
            description: Some("d".repeat(140)),
            category: Some("Courses".to_string()),
            ..ContentInput::default()
        };
        let seo = generate_optimized_seo(&content, DEFAULT_SITE_URL, Some("/courses"));

        assert_eq!(seo.score, 100);
        assert_eq!(seo.canonical_url, "https://personalwings.com/courses");
        assert_eq!(seo.og_description, seo.description);
    }

    #[test]
    fn test_generate_empty_content_reports_short_description() {
        let seo = generate_optimized_seo(&ContentInput::default(), DEFAULT_SITE_URL, None);

        assert_eq!(seo.canonical_url, "https://personalwings.com");
        // 85-character description: (600 + 70) / 7
        assert_eq!(seo.score, 96);
    }

    #[test]
    fn test_optimize_keeps_all_valid_fields() {
        let existing = in_range_existing();
        let seo = optimize_existing_seo(
            &existing,
            &ContentInput::with_title("Different"),
            DEFAULT_SITE_URL,
        );

        assert_eq!(ExistingSeo::from(seo.clone()), existing);
        assert_eq!(seo.score, GUARANTEED_SCORE);
    }

    #[test]
    fn test_optimize_regenerates_out_of_range_title() {
        let existing = ExistingSeo {
            title: Some("Too short".to_string()),
            ..in_range_existing()
        };
        let content = ContentInput::with_title("Go");
        let seo = optimize_existing_seo(&existing, &content, DEFAULT_SITE_URL);

        assert_eq!(seo.title, "Go - Personal Wings Aviation Training");
        assert_eq!(seo.keywords, "kept, keywords");
    }

    #[test]
    fn test_optimize_regenerates_empty_fields() {
        let existing = ExistingSeo {
            keywords: Some(String::new()),
            canonical_url: None,
            ..in_range_existing()
        };
        let seo = optimize_existing_seo(
            &existing,
            &ContentInput::default(),
            "https://personalwings.com/",
        );

        assert!(seo.keywords.starts_with("flight training"));
        assert_eq!(seo.canonical_url, "https://personalwings.com");
    }

    #[test]
    fn test_optimize_score_guaranteed_even_when_regenerated_short() {
        let seo = optimize_existing_seo(
            &ExistingSeo::default(),
            &ContentInput::default(),
            DEFAULT_SITE_URL,
        );

        assert_eq!(seo.score, 100);
        assert!(calculate_score(&seo) < 100);
    }

    #[test]
    fn test_service_uses_bound_site_url() {
        let service = SeoService::new("https://staging.personalwings.com/");
        let seo = service.generate(&ContentInput::with_title("Ground School"), Some("/ground"));

        assert_eq!(seo.canonical_url, "https://staging.personalwings.com/ground");
        assert_eq!(SeoService::default().site_url(), DEFAULT_SITE_URL);
    }
}
