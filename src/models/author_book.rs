//! Author-book association model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Author-book link from database, keyed by the (author, book) pair
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuthorBook {
    pub author_id: i32,
    pub book_id: i32,
}

/// Create author-book link request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthorBook {
    #[validate(range(min = 1, message = "Author is required"))]
    pub author_id: i32,
    #[validate(range(min = 1, message = "Book is required"))]
    pub book_id: i32,
}

impl CreateAuthorBook {
    pub const FIELD_ORDER: &'static [&'static str] = &["author_id", "book_id"];
}
