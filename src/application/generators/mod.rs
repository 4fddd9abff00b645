//! Pure field generators and the score calculator.
//!
//! Each generator derives one field of an [`OptimizedSeo`] bundle from a
//! [`ContentInput`] and aims for the field's target length range. The ranges
//! below are shared with [`score`], which grades a finished bundle.
//!
//! | Field          | Target      |
//! |----------------|-------------|
//! | title          | 30..=65     |
//! | description    | 120..=160   |
//! | og title       | at most 70  |
//! | keywords       | 10 entries  |
//!
//! [`OptimizedSeo`]: crate::domain::entities::OptimizedSeo
//! [`ContentInput`]: crate::domain::entities::ContentInput

use std::ops::RangeInclusive;

pub mod description;
pub mod keywords;
pub mod og;
pub mod score;
pub mod title;

pub use description::generate_description;
pub use keywords::generate_keywords;
pub use og::{generate_og_description, generate_og_title};
pub use score::{calculate_score, score_breakdown};
pub use title::generate_title;

/// Subject used when a content input carries no title or subtitle.
pub const BRAND_NAME: &str = "Personal Wings";

pub const TITLE_RANGE: RangeInclusive<usize> = 30..=65;

pub const DESCRIPTION_RANGE: RangeInclusive<usize> = 120..=160;

pub const OG_TITLE_MAX: usize = 70;

pub const MAX_KEYWORDS: usize = 10;
