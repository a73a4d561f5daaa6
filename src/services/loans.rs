//! Loan management service
//!
//! The duplicate-pair guard and the book/audit status propagation live in
//! the loans repository; this layer validates input and checks that the
//! referenced book and member exist before handing off.

use validator::Validate;

use crate::{
    error::{validation_errors, AppResult},
    models::loan::{CreateLoan, Loan, UpdateLoan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Loan> {
        self.repository.loans.get_by_id(id).await
    }

    /// Check out a book, marking it unavailable
    pub async fn create(&self, input: CreateLoan) -> AppResult<Loan> {
        input.validate().map_err(|e| validation_errors(e, CreateLoan::FIELD_ORDER))?;

        // Verify the referenced rows exist
        self.repository.books.get_by_id(input.book_id).await?;
        if let Some(member_id) = input.member_id {
            self.repository.members.get_by_id(member_id).await?;
        }

        self.repository.loans.create(&input).await
    }

    /// Rewrite a loan; the book's availability follows the new status
    pub async fn update(&self, id: i32, input: UpdateLoan) -> AppResult<Loan> {
        input.validate().map_err(|e| validation_errors(e, UpdateLoan::FIELD_ORDER))?;

        self.repository.books.get_by_id(input.book_id).await?;
        if let Some(member_id) = input.member_id {
            self.repository.members.get_by_id(member_id).await?;
        }

        self.repository.loans.update(id, &input).await
    }

    /// Delete a loan; the book reverts to available
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.loans.delete(id).await
    }
}
