//! Application layer: SEO field generation and bundle orchestration.
//!
//! Field generators are pure functions over a
//! [`ContentInput`](crate::domain::entities::ContentInput); services compose
//! them into complete bundles and provide a clean API for the CLI and for
//! library callers.
//!
//! # Modules
//!
//! - [`generators`] - One generator per field, plus the score calculator
//! - [`services::seo_service`] - Build-from-scratch, patch-existing and
//!   section orchestrators
//!
//! Nothing in this layer performs I/O or holds shared state, so every
//! function can be called concurrently without coordination.

pub mod generators;
pub mod services;
