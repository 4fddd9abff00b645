//! Value objects flowing through SEO generation.
//!
//! # Entity Types
//!
//! - [`ContentInput`] - Raw content fragments from an editor form
//! - [`OptimizedSeo`] - Fully populated metadata bundle
//! - [`ExistingSeo`] - Partially populated bundle to be patched
//! - [`ScoreBreakdown`] - Per-field sub-scores of a bundle
//! - [`SectionKind`] / [`SectionContent`] - Section-specific inputs
//!
//! None of these has identity or a lifecycle beyond a single call.

pub mod content;
pub mod section;
pub mod seo;

pub use content::ContentInput;
pub use section::{SectionContent, SectionKind};
pub use seo::{ExistingSeo, OptimizedSeo, ScoreBreakdown};
