//! Date diagnostics for content records.
//!
//! Inspects raw date strings the way the dashboard receives them and reports
//! which ones will render. Invoked explicitly from tests or from the
//! `seo dates` command; importing the module has no side effects.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::error::AppError;
use crate::utils::date_format::{format_date, parse_content_date};

/// Outcome of inspecting one date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStatus {
    Valid,
    Invalid,
    /// Empty or whitespace-only.
    Missing,
}

/// Diagnosis of a single raw date value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateDiagnosis {
    pub input: String,
    pub status: DateStatus,
    pub parsed: Option<DateTime<Utc>>,
    /// Display form, e.g. `Jan 5, 2024`.
    pub formatted: Option<String>,
}

/// Diagnoses every value in order.
pub fn diagnose_dates<I, S>(values: I) -> Vec<DateDiagnosis>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| diagnose_date(value.as_ref()))
        .collect()
}

/// Diagnoses a single value.
pub fn diagnose_date(value: &str) -> DateDiagnosis {
    if value.trim().is_empty() {
        return DateDiagnosis {
            input: value.to_string(),
            status: DateStatus::Missing,
            parsed: None,
            formatted: None,
        };
    }

    let parsed = parse_content_date(value);
    let status = if parsed.is_some() {
        DateStatus::Valid
    } else {
        tracing::debug!(value, "Unparseable date value");
        DateStatus::Invalid
    };

    DateDiagnosis {
        input: value.to_string(),
        status,
        parsed,
        formatted: format_date(value),
    }
}

/// Checks a batch of date values.
///
/// Missing values are tolerated; any invalid value fails the batch.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing every invalid value.
///
/// # Returns
///
/// The number of valid values.
pub fn validate_dates<I, S>(values: I) -> Result<usize, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let diagnoses = diagnose_dates(values);

    let invalid: Vec<&str> = diagnoses
        .iter()
        .filter(|d| d.status == DateStatus::Invalid)
        .map(|d| d.input.as_str())
        .collect();

    if !invalid.is_empty() {
        return Err(AppError::bad_request(
            format!("{} invalid date value(s)", invalid.len()),
            json!({ "invalid": invalid }),
        ));
    }

    Ok(diagnoses
        .iter()
        .filter(|d| d.status == DateStatus::Valid)
        .count())
}
