//! # SEO Generator
//!
//! Deterministic SEO metadata generation for Personal Wings content: page
//! titles, meta descriptions, keywords, Open Graph fields, canonical URLs and
//! a quality score, derived from the content fragments an editor enters.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Content inputs, bundles and section kinds
//! - **Application Layer** ([`application`]) - Field generators, scoring and orchestration
//! - **DTO Layer** ([`dto`]) - Validated requests for the command-line front end
//! - **Diagnostics** ([`diagnostics`]) - On-demand checks of raw content dates
//!
//! ## Features
//!
//! - Length-bounded titles (30-65), descriptions (120-160) and OG titles (up to 70)
//! - HTML-aware description cleanup
//! - Deduplicated keyword lists capped at ten entries
//! - Patching of existing bundles that keeps every acceptable field
//! - Section presets for banner, about, blog, events and testimonials content
//!
//! ## Quick Start
//!
//! ```ignore
//! use seo_generator::prelude::*;
//!
//! let content = ContentInput::with_title("Private Pilot License");
//! let seo = generate_optimized_seo(&content, DEFAULT_SITE_URL, Some("/ppl"));
//! assert_eq!(seo.canonical_url, "https://personalwings.com/ppl");
//! ```
//!
//! ## Configuration
//!
//! The `seo` binary reads its configuration from environment variables via
//! [`config::Config`]. The library itself takes the site URL as an argument.

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod dto;
pub mod error;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::generators::{
        calculate_score, generate_description, generate_keywords, generate_og_description,
        generate_og_title, generate_title, score_breakdown,
    };
    pub use crate::application::services::{
        DEFAULT_SITE_URL, SeoService, generate_about_section_seo, generate_banner_seo,
        generate_blog_seo, generate_events_seo, generate_optimized_seo, generate_section_seo,
        generate_testimonials_seo, optimize_existing_seo,
    };
    pub use crate::domain::entities::{
        ContentInput, ExistingSeo, OptimizedSeo, ScoreBreakdown, SectionContent, SectionKind,
    };
    pub use crate::error::AppError;
    pub use crate::utils::url_normalizer::build_canonical_url;
}
