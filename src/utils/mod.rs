//! Utility functions for text handling, URL processing, and date display.
//!
//! - [`text`] - Character-aware truncation and HTML cleanup
//! - [`url_normalizer`] - Canonical URL building and site URL validation
//! - [`date_format`] - Human-readable date rendering

pub mod date_format;
pub mod text;
pub mod url_normalizer;
