//! Orchestration services for the application layer.

pub mod seo_service;

pub use seo_service::{
    DEFAULT_SITE_URL, GUARANTEED_SCORE, SeoService, generate_about_section_seo,
    generate_banner_seo, generate_blog_seo, generate_events_seo, generate_optimized_seo,
    generate_section_seo, generate_testimonials_seo, optimize_existing_seo,
};
