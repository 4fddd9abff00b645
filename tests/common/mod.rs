#![allow(dead_code)]

use seo_generator::domain::entities::{ContentInput, ExistingSeo};

pub const SITE_URL: &str = "https://personalwings.com";

/// Content resembling a course page entered in the dashboard.
pub fn course_content() -> ContentInput {
    ContentInput {
        title: Some("Commercial Pilot License Training".to_string()),
        subtitle: Some("From first solo to airline-ready".to_string()),
        description: Some(
            "<p>Our commercial pilot program combines <strong>250 hours</strong> of flight time \
             with structured ground school, simulator sessions and checkride preparation.</p>"
                .to_string(),
        ),
        content: None,
        category: Some("Courses".to_string()),
        tags: Some(vec!["cpl".to_string(), "commercial pilot".to_string()]),
    }
}

pub fn content_with_title(title: &str) -> ContentInput {
    ContentInput::with_title(title)
}

pub fn content_with_description(description: &str) -> ContentInput {
    ContentInput {
        description: Some(description.to_string()),
        ..ContentInput::default()
    }
}

/// A stored bundle whose fields all pass the keep rules.
pub fn valid_existing_seo() -> ExistingSeo {
    ExistingSeo {
        title: Some("Personal Wings Flight Academy | Learn to Fly Today".to_string()),
        description: Some(
            "Personal Wings offers private, instrument and commercial pilot training with \
             experienced instructors and a modern fleet of training aircraft."
                .to_string(),
        ),
        keywords: Some("flight academy, pilot training".to_string()),
        og_title: Some("Personal Wings Flight Academy".to_string()),
        og_description: Some("Learn to fly with Personal Wings.".to_string()),
        canonical_url: Some("https://personalwings.com/academy".to_string()),
    }
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn keyword_list(keywords: &str) -> Vec<&str> {
    keywords.split(", ").collect()
}
