//! Developer diagnostics, run on demand.
//!
//! - [`dates`] - Classifies raw content date values as valid, invalid or missing

pub mod dates;

pub use dates::{DateDiagnosis, DateStatus, diagnose_date, diagnose_dates, validate_dates};
