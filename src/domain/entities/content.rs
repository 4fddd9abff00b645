//! Content fragments collected from dashboard forms.

use serde::{Deserialize, Serialize};

/// Raw content an editor supplies before SEO generation.
///
/// Every field is optional and an empty string is treated exactly like a
/// missing one. Generators never fail on an all-empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Free text, may contain HTML markup.
    pub description: Option<String>,
    /// Reserved; not read by any generator yet.
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ContentInput {
    /// Creates an input carrying only a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Non-empty title, if any.
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Non-empty subtitle, if any.
    pub fn subtitle(&self) -> Option<&str> {
        non_empty(&self.subtitle)
    }

    /// Non-empty description, if any.
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Non-empty category, if any.
    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    /// Tags in caller order, empty slice when absent.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
