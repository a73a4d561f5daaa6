//! Book audit service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{field_errors, validation_errors, AppError, AppResult},
    models::book_audit::{BookAudit, CreateBookAudit, UpdateBookAudit},
    repository::Repository,
};

const DUPLICATE_AUDIT: &str =
    "A book audit with this book ID, book status, and changed date already exists";

#[derive(Clone)]
pub struct BookAuditsService {
    repository: Repository,
}

impl BookAuditsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BookAudit>> {
        self.repository.book_audits.list().await
    }

    pub async fn list_for_book(&self, book_id: i32) -> AppResult<Vec<BookAudit>> {
        self.repository.books.get_by_id(book_id).await?;
        self.repository.book_audits.list_for_book(book_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<BookAudit> {
        self.repository.book_audits.get_by_id(id).await
    }

    /// Validate, guard the (book, status, date) triple, then insert.
    ///
    /// The default `changed_date` is resolved once here so the guard checks
    /// the same triple the insert writes.
    pub async fn create(&self, input: CreateBookAudit) -> AppResult<BookAudit> {
        input.validate().map_err(|e| validation_errors(e, CreateBookAudit::FIELD_ORDER))?;

        self.repository.books.get_by_id(input.book_id).await?;

        let changed_date = input.changed_date.unwrap_or_else(Utc::now);
        if self
            .repository
            .book_audits
            .snapshot_exists(input.book_id, input.book_status, changed_date)
            .await?
        {
            return Err(AppError::Conflict(field_errors(
                &["book_id", "book_status", "changed_date"],
                DUPLICATE_AUDIT,
            )));
        }

        self.repository.book_audits.create(&input, changed_date).await
    }

    pub async fn update(&self, id: i32, input: UpdateBookAudit) -> AppResult<BookAudit> {
        input.validate().map_err(|e| validation_errors(e, UpdateBookAudit::FIELD_ORDER))?;

        self.repository.books.get_by_id(input.book_id).await?;
        self.repository.book_audits.update(id, &input).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.book_audits.delete(id).await
    }
}
