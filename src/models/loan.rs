//! Loan model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::LoanStatus;

/// Loan model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub loan_id: i32,
    #[sqlx(try_from = "String")]
    pub loan_status: LoanStatus,
    pub date_checked_out: DateTime<Utc>,
    pub date_due: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
    pub book_id: i32,
    pub member_id: Option<i32>,
    pub changed_date: DateTime<Utc>,
}

/// Create loan request
///
/// Only the book is mandatory. Omitted fields take the checkout defaults:
/// status `CheckedOut`, checked-out date now, due date in 14 days.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLoan {
    #[validate(range(min = 1, message = "Book is required"))]
    pub book_id: i32,
    pub member_id: Option<i32>,
    pub loan_status: Option<LoanStatus>,
    pub date_checked_out: Option<DateTime<Utc>>,
    pub date_due: Option<DateTime<Utc>>,
    pub date_returned: Option<DateTime<Utc>>,
    pub changed_date: Option<DateTime<Utc>>,
}

impl CreateLoan {
    pub const FIELD_ORDER: &'static [&'static str] = &["book_id"];
}

/// Update loan request (all fields written back, matching the edit form)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLoan {
    pub loan_status: LoanStatus,
    pub date_checked_out: DateTime<Utc>,
    pub date_due: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
    #[validate(range(min = 1, message = "Book is required"))]
    pub book_id: i32,
    pub member_id: Option<i32>,
    /// Defaults to the current time when omitted
    pub changed_date: Option<DateTime<Utc>>,
}

impl UpdateLoan {
    pub const FIELD_ORDER: &'static [&'static str] = &["book_id"];
}
