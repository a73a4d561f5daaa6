//! Error types for NexaLibrium server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Application error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 3,
    NoSuchData = 20,
    Duplicate = 8,
    BadValue = 18,
}

/// Ordered field -> message map, the shape the UI renders directly.
///
/// Insertion order matters: callers display the first non-empty message,
/// so the map must come out on the wire in the order the rules ran.
pub type FieldErrors = IndexMap<String, String>;

/// Build a [`FieldErrors`] map attaching the same message to several fields,
/// the way natural-key conflicts report against every key column at once.
pub fn field_errors(fields: &[&str], message: &str) -> FieldErrors {
    fields
        .iter()
        .map(|f| (f.to_string(), message.to_string()))
        .collect()
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Conflict")]
    Conflict(FieldErrors),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Per-field messages for validation and conflict errors
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub fields: Option<FieldErrors>,
}

impl AppError {
    /// First non-empty field message, used as the top-level message for
    /// field-keyed errors (the UI shows one message at a time).
    fn first_field_message(fields: &FieldErrors) -> String {
        fields
            .values()
            .find(|m| !m.is_empty())
            .cloned()
            .unwrap_or_else(|| "Invalid input".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg, None),
            AppError::Validation(fields) => {
                let message = Self::first_field_message(&fields);
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, message, Some(fields))
            }
            AppError::Conflict(fields) => {
                let message = Self::first_field_message(&fields);
                (StatusCode::CONFLICT, ErrorCode::Duplicate, message, Some(fields))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                    None,
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg, None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            fields,
        });

        (status, body).into_response()
    }
}

/// Translate `validator` output into the ordered field map.
///
/// `order` is the request struct's declared field order (its `FIELD_ORDER`
/// const); `field_errors()` hands back a `HashMap`, so without it the map
/// order and the surfaced top-level message would be arbitrary.
pub fn validation_errors(errors: validator::ValidationErrors, order: &[&str]) -> AppError {
    let by_field = errors.field_errors();
    let mut fields = FieldErrors::new();
    for &field in order {
        if let Some(errs) = by_field.get(field) {
            fields.insert(field.to_string(), field_message(field, errs));
        }
    }
    // Fields missing from the order list still get reported, after it
    for (field, errs) in by_field {
        if !fields.contains_key(field) {
            fields.insert(field.to_string(), field_message(field, errs));
        }
    }
    AppError::Validation(fields)
}

fn field_message(field: &str, errs: &[validator::ValidationError]) -> String {
    errs.iter()
        .find_map(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{} is invalid", field))
}

/// Whether a sqlx error is a unique-constraint violation (Postgres 23505).
///
/// The natural-key guards run a read first, but the unique indexes close the
/// race window; an insert that loses the race is reported with the same
/// field-keyed conflict shape the guard would have produced.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
    )
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
