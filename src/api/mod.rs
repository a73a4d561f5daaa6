//! API handlers for NexaLibrium REST endpoints

pub mod author_books;
pub mod authors;
pub mod book_audits;
pub mod books;
pub mod health;
pub mod loans;
pub mod members;
pub mod openapi;

use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by every delete endpoint
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted(entity: &str, id: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{} with id {} deleted successfully", entity, id),
        }
    }
}
