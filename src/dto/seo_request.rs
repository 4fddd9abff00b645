//! Request DTOs accepted by the `seo` command-line front end.
//!
//! The engine never fails, so validation happens here: site URLs and paths
//! coming from flags or request files are checked before generation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{ContentInput, ExistingSeo, SectionContent, SectionKind};
use crate::error::{AppError, map_validation_errors};

/// Canonical paths are absolute and contain no whitespace.
static PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/\S*$").unwrap());

/// Request to generate a bundle from scratch.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[validate(url(message = "Invalid site URL"))]
    pub site_url: String,

    #[validate(regex(path = *PATH_REGEX, message = "Path must start with '/'"))]
    pub path: Option<String>,

    #[serde(default)]
    pub content: ContentInput,
}

/// Request to patch an existing bundle.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    #[validate(url(message = "Invalid site URL"))]
    pub site_url: String,

    #[serde(default)]
    pub existing: ExistingSeo,

    #[serde(default)]
    pub content: ContentInput,
}

/// Request to generate a bundle for a site section.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    #[validate(url(message = "Invalid site URL"))]
    pub site_url: String,

    pub kind: SectionKind,

    #[serde(default)]
    pub content: SectionContent,
}

/// Runs `validator` rules and converts failures into [`AppError::Validation`].
///
/// # Errors
///
/// Returns [`AppError::Validation`] with per-field messages.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate().map_err(map_validation_errors)
}
