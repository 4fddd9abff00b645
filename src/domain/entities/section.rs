//! Site sections with their own SEO defaults.

use serde::{Deserialize, Serialize};

use super::content::ContentInput;

/// A site section with a fixed SEO category and default keyword tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Banner,
    About,
    Blog,
    Events,
    Testimonials,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Banner,
        SectionKind::About,
        SectionKind::Blog,
        SectionKind::Events,
        SectionKind::Testimonials,
    ];

    /// Category label appended to titles and used as a keyword.
    pub fn category(self) -> &'static str {
        match self {
            SectionKind::Banner => "Banner",
            SectionKind::About => "About",
            SectionKind::Blog => "Blog",
            SectionKind::Events => "Events",
            SectionKind::Testimonials => "Testimonials",
        }
    }

    /// Keyword tags seeded for the section.
    pub fn default_tags(self) -> &'static [&'static str] {
        match self {
            SectionKind::Banner | SectionKind::About => &[],
            SectionKind::Blog => &["blog", "articles", "aviation news"],
            SectionKind::Events => &["events", "aviation events", "workshops"],
            SectionKind::Testimonials => &["testimonials", "reviews", "student success"],
        }
    }
}

/// Narrow content shape the section editors collect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}

impl SectionContent {
    /// Lifts the section content into a generator input with the section's
    /// category and tags.
    pub fn into_content_input(self, kind: SectionKind) -> ContentInput {
        let tags = kind.default_tags();

        ContentInput {
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            content: None,
            category: Some(kind.category().to_string()),
            tags: (!tags.is_empty()).then(|| tags.iter().map(|t| t.to_string()).collect()),
        }
    }
}
