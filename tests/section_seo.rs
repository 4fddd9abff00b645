mod common;

use common::{SITE_URL, keyword_list};
use seo_generator::prelude::*;

fn titled(title: &str) -> SectionContent {
    SectionContent {
        title: Some(title.to_string()),
        ..SectionContent::default()
    }
}

#[test]
fn test_blog_keywords() {
    let seo = generate_blog_seo(titled("X"), SITE_URL);
    let keywords = keyword_list(&seo.keywords);

    for expected in [
        "flight training",
        "aviation training",
        "pilot training",
        "flight school",
        "blog",
        "articles",
        "aviation news",
    ] {
        assert!(keywords.contains(&expected), "missing {expected}");
    }
    assert_eq!(keywords.iter().filter(|k| **k == "blog").count(), 1);
    assert!(keywords.len() <= 10);
}

#[test]
fn test_blog_title_carries_category() {
    let seo = generate_blog_seo(titled("Crosswind Landings"), SITE_URL);
    assert_eq!(seo.title, "Crosswind Landings | Blog - Personal Wings Aviation Training");
}

#[test]
fn test_banner_uses_category_keyword_only() {
    let seo = generate_banner_seo(titled("Fly With Us"), SITE_URL);

    assert_eq!(
        seo.keywords,
        "flight training, aviation training, pilot training, flight school, banner"
    );
    assert!(seo.title.contains("| Banner"));
}

#[test]
fn test_about_section() {
    let content = SectionContent {
        title: Some("About Personal Wings".to_string()),
        subtitle: Some("Training pilots since 2009".to_string()),
        description: None,
    };
    let seo = generate_about_section_seo(content, SITE_URL);

    assert!(seo.title.starts_with("About Personal Wings | About"));
    assert!(seo.description.starts_with("Training pilots since 2009 "));
    assert!(keyword_list(&seo.keywords).contains(&"about"));
}

#[test]
fn test_events_keywords() {
    let seo = generate_events_seo(titled("Summer Fly-In"), SITE_URL);
    let keywords = keyword_list(&seo.keywords);

    assert!(keywords.contains(&"aviation events"));
    assert!(keywords.contains(&"workshops"));
    assert_eq!(keywords.iter().filter(|k| **k == "events").count(), 1);
}

#[test]
fn test_testimonials_keywords() {
    let seo = generate_testimonials_seo(SectionContent::default(), SITE_URL);
    let keywords = keyword_list(&seo.keywords);

    assert!(keywords.contains(&"student success"));
    assert!(keywords.contains(&"reviews"));
    assert!(seo.title.starts_with("Personal Wings | Testimonials"));
}

#[test]
fn test_wrappers_match_generic_section() {
    for kind in SectionKind::ALL {
        let content = titled("Section title");
        let via_kind = generate_section_seo(kind, content.clone(), SITE_URL);
        let via_service = SeoService::new(SITE_URL).section(kind, content.clone());
        let direct = generate_optimized_seo(&content.into_content_input(kind), SITE_URL, None);

        assert_eq!(via_kind, direct);
        assert_eq!(via_service, direct);
        assert_eq!(direct.canonical_url, SITE_URL);
    }
}
