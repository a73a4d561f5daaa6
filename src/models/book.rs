//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::BookStatus;

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub isbn: String,
    pub book_category: String,
    pub book_type: String,
    #[sqlx(try_from = "String")]
    pub book_status: BookStatus,
    pub changed_date: DateTime<Utc>,
}

/// Minimal book reference for foreign-key pickers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookRef {
    pub book_id: i32,
    pub title: String,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "ISBN is required"))]
    pub isbn: String,
    #[validate(length(min = 1, max = 255, message = "Book category is required"))]
    pub book_category: String,
    #[validate(length(min = 1, max = 255, message = "Book type is required"))]
    pub book_type: String,
    /// Defaults to `Available` when omitted
    pub book_status: Option<BookStatus>,
    /// Defaults to the current time when omitted
    pub changed_date: Option<DateTime<Utc>>,
}

impl CreateBook {
    /// Validated fields in declared order, driving the order of failure
    /// messages on the wire
    pub const FIELD_ORDER: &'static [&'static str] =
        &["title", "isbn", "book_category", "book_type"];

    pub fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.isbn = self.isbn.trim().to_string();
        self.book_category = self.book_category.trim().to_string();
        self.book_type = self.book_type.trim().to_string();
    }
}

/// Update book request (all fields written back, matching the edit form)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "ISBN is required"))]
    pub isbn: String,
    #[validate(length(min = 1, max = 255, message = "Book category is required"))]
    pub book_category: String,
    #[validate(length(min = 1, max = 255, message = "Book type is required"))]
    pub book_type: String,
    pub book_status: BookStatus,
    pub changed_date: Option<DateTime<Utc>>,
}

impl UpdateBook {
    pub const FIELD_ORDER: &'static [&'static str] =
        &["title", "isbn", "book_category", "book_type"];

    pub fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.isbn = self.isbn.trim().to_string();
        self.book_category = self.book_category.trim().to_string();
        self.book_type = self.book_type.trim().to_string();
    }
}
