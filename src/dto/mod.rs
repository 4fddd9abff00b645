//! Data Transfer Objects for command-line requests.

pub mod seo_request;

pub use seo_request::{GenerateRequest, OptimizeRequest, SectionRequest, validate_request};
