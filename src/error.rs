//! Error types for the crate boundary.
//!
//! The generation engine itself is total and never fails. Errors only come
//! from the edges: reading request files, parsing JSON and validating CLI
//! input. Configuration failures are reported through `anyhow` in `config`.

use serde::Serialize;
use serde_json::{Value, json};

/// Serializable error envelope printed by the CLI in `--json` mode.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Serialize, Clone)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Io(_) => "io_error",
            AppError::Json(_) => "json_error",
        }
    }

    /// Converts the error into the envelope printed by the CLI.
    pub fn to_body(&self) -> ErrorBody {
        let details = match self {
            AppError::Validation { details, .. } => details.clone(),
            AppError::Io(e) => json!({ "kind": e.kind().to_string() }),
            AppError::Json(e) => json!({ "line": e.line(), "column": e.column() }),
        };

        ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message: self.to_string(),
                details,
            },
        }
    }
}

/// Flattens `validator` errors into a `Validation` error with per-field details.
pub fn map_validation_errors(errors: validator::ValidationErrors) -> AppError {
    let fields: serde_json::Map<String, Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<Value> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| Value::String(m.to_string()))
                        .unwrap_or_else(|| Value::String(e.code.to_string()))
                })
                .collect();
            (field.to_string(), Value::Array(messages))
        })
        .collect();

    AppError::bad_request("Request validation failed", Value::Object(fields))
}
