//! Book audit model and related types
//!
//! Audit rows are point-in-time status snapshots, created and deleted
//! independently of the book's authoritative `book_status` (the "track in
//! audit" flow) but mirrored by the loan lifecycle when they exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::BookStatus;

/// Book audit model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookAudit {
    pub book_audit_id: i32,
    pub book_id: i32,
    #[sqlx(try_from = "String")]
    pub book_status: BookStatus,
    pub changed_date: DateTime<Utc>,
}

/// Create book audit request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookAudit {
    #[validate(range(min = 1, message = "Book is required"))]
    pub book_id: i32,
    pub book_status: BookStatus,
    /// Defaults to the current time when omitted
    pub changed_date: Option<DateTime<Utc>>,
}

impl CreateBookAudit {
    pub const FIELD_ORDER: &'static [&'static str] = &["book_id"];
}

/// Update book audit request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookAudit {
    #[validate(range(min = 1, message = "Book is required"))]
    pub book_id: i32,
    pub book_status: BookStatus,
    pub changed_date: DateTime<Utc>,
}

impl UpdateBookAudit {
    pub const FIELD_ORDER: &'static [&'static str] = &["book_id"];
}
