//! Loans repository for database operations
//!
//! Besides plain CRUD on the loans table, this repository owns the status
//! propagation: every loan lifecycle event also rewrites the denormalized
//! `books.book_status` and mirrors it into any `bookaudits` rows for the
//! book. The statements run sequentially on the pool, best-effort, with no
//! transaction around the sequence.

use chrono::{Duration, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{field_errors, is_unique_violation, AppError, AppResult},
    models::{
        enums::{BookStatus, LoanStatus},
        loan::{CreateLoan, Loan, UpdateLoan},
    },
};

const DUPLICATE_PAIR: &str = "A loan with this member ID and book ID already exists";

/// Checkout period applied when no due date is supplied
const DEFAULT_LOAN_DAYS: i64 = 14;

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all loans ordered by primary key
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>("SELECT * FROM loans ORDER BY loan_id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(loans)
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE loan_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No loan found with id {}", id)))
    }

    /// Check if any loan exists for this exact (book, member) pair,
    /// regardless of status. A missing member compares as a value, so two
    /// member-less loans for the same book also collide.
    pub async fn pair_exists(&self, book_id: i32, member_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM loans WHERE book_id = $1 AND member_id IS NOT DISTINCT FROM $2)",
        )
        .bind(book_id)
        .bind(member_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Create a new loan and mark the book unavailable.
    ///
    /// Guard: rejects when a loan for the exact (book, member) pair already
    /// exists, reporting against both foreign-key fields.
    pub async fn create(&self, loan: &CreateLoan) -> AppResult<Loan> {
        let now = Utc::now();

        if self.pair_exists(loan.book_id, loan.member_id).await? {
            return Err(AppError::Conflict(field_errors(
                &["book_id", "member_id"],
                DUPLICATE_PAIR,
            )));
        }

        let status = loan.loan_status.unwrap_or(LoanStatus::CheckedOut);
        let date_checked_out = loan.date_checked_out.unwrap_or(now);
        let date_due = loan
            .date_due
            .unwrap_or(date_checked_out + Duration::days(DEFAULT_LOAN_DAYS));
        let changed_date = loan.changed_date.unwrap_or(now);

        let inserted = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (loan_status, date_checked_out, date_due, date_returned,
                               book_id, member_id, changed_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(status.as_str())
        .bind(date_checked_out)
        .bind(date_due)
        .bind(loan.date_returned)
        .bind(loan.book_id)
        .bind(loan.member_id)
        .bind(changed_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(field_errors(&["book_id", "member_id"], DUPLICATE_PAIR))
            } else {
                e.into()
            }
        })?;

        // Checkout only rewrites the book itself; audit rows are first
        // touched when the loan is edited or deleted.
        let book_status = match inserted.loan_status {
            LoanStatus::Returned => BookStatus::Available,
            LoanStatus::CheckedOut | LoanStatus::Overdue => BookStatus::Unavailable,
        };
        self.write_book_status(inserted.book_id, book_status).await?;

        Ok(inserted)
    }

    /// Update a loan and re-derive the book's availability from the new
    /// status, mirroring it into the book's audit rows.
    pub async fn update(&self, id: i32, loan: &UpdateLoan) -> AppResult<Loan> {
        let changed_date = loan.changed_date.unwrap_or_else(Utc::now);

        let updated = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans
            SET loan_status = $1, date_checked_out = $2, date_due = $3, date_returned = $4,
                book_id = $5, member_id = $6, changed_date = $7
            WHERE loan_id = $8
            RETURNING *
            "#,
        )
        .bind(loan.loan_status.as_str())
        .bind(loan.date_checked_out)
        .bind(loan.date_due)
        .bind(loan.date_returned)
        .bind(loan.book_id)
        .bind(loan.member_id)
        .bind(changed_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(field_errors(&["book_id", "member_id"], DUPLICATE_PAIR))
            } else {
                e.into()
            }
        })?
        .ok_or_else(|| AppError::NotFound(format!("No loan found with id {}", id)))?;

        self.propagate_status(updated.book_id, updated.loan_status)
            .await?;

        Ok(updated)
    }

    /// Delete a loan and revert its book to available.
    ///
    /// The book is resolved before the delete; a missing loan fails here and
    /// leaves the book untouched, so a second delete of the same id cannot
    /// rewrite the status again.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let book_id: i32 = sqlx::query_scalar("SELECT book_id FROM loans WHERE loan_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No loan found with id {}", id)))?;

        sqlx::query("DELETE FROM loans WHERE loan_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.write_book_status(book_id, BookStatus::Available).await?;
        self.mirror_audit_status(book_id, BookStatus::Available).await?;

        Ok(())
    }

    /// Map a loan status onto the book's availability, write it onto the
    /// book, and mirror it into any audit rows for that book.
    async fn propagate_status(&self, book_id: i32, status: LoanStatus) -> AppResult<()> {
        let book_status = match status {
            LoanStatus::Returned => BookStatus::Available,
            LoanStatus::CheckedOut | LoanStatus::Overdue => BookStatus::Unavailable,
        };
        self.write_book_status(book_id, book_status).await?;
        self.mirror_audit_status(book_id, book_status).await?;
        Ok(())
    }

    async fn write_book_status(&self, book_id: i32, status: BookStatus) -> AppResult<()> {
        sqlx::query("UPDATE books SET book_status = $1 WHERE book_id = $2")
            .bind(status.as_str())
            .bind(book_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Zero audit rows for the book is fine; the update is then a no-op.
    async fn mirror_audit_status(&self, book_id: i32, status: BookStatus) -> AppResult<()> {
        sqlx::query("UPDATE bookaudits SET book_status = $1 WHERE book_id = $2")
            .bind(status.as_str())
            .bind(book_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
