//! Domain layer: the plain data the generators consume and produce.
//!
//! The domain layer has no behavior beyond small accessors and conversions.
//! Field generation and scoring live in [`crate::application::generators`];
//! orchestration lives in [`crate::application::services`].

pub mod entities;
