//! Book audits repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book_audit::{BookAudit, CreateBookAudit, UpdateBookAudit},
        enums::BookStatus,
    },
};

#[derive(Clone)]
pub struct BookAuditsRepository {
    pool: Pool<Postgres>,
}

impl BookAuditsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all audit rows ordered by primary key
    pub async fn list(&self) -> AppResult<Vec<BookAudit>> {
        let audits =
            sqlx::query_as::<_, BookAudit>("SELECT * FROM bookaudits ORDER BY book_audit_id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(audits)
    }

    /// List audit rows for one book
    pub async fn list_for_book(&self, book_id: i32) -> AppResult<Vec<BookAudit>> {
        let audits = sqlx::query_as::<_, BookAudit>(
            "SELECT * FROM bookaudits WHERE book_id = $1 ORDER BY book_audit_id ASC",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(audits)
    }

    /// Get audit row by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BookAudit> {
        sqlx::query_as::<_, BookAudit>("SELECT * FROM bookaudits WHERE book_audit_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No book audit found with id {}", id)))
    }

    /// Check if the (book, status, date) snapshot already exists.
    ///
    /// The caller resolves any default `changed_date` before calling, so the
    /// checked triple is exactly the one a following insert writes.
    pub async fn snapshot_exists(
        &self,
        book_id: i32,
        status: BookStatus,
        changed_date: DateTime<Utc>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookaudits
                WHERE book_id = $1 AND book_status = $2 AND changed_date = $3
            )
            "#,
        )
        .bind(book_id)
        .bind(status.as_str())
        .bind(changed_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Insert a new audit snapshot
    pub async fn create(
        &self,
        audit: &CreateBookAudit,
        changed_date: DateTime<Utc>,
    ) -> AppResult<BookAudit> {
        let audit = sqlx::query_as::<_, BookAudit>(
            r#"
            INSERT INTO bookaudits (book_id, book_status, changed_date)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(audit.book_id)
        .bind(audit.book_status.as_str())
        .bind(changed_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(audit)
    }

    /// Update an audit row by ID
    pub async fn update(&self, id: i32, audit: &UpdateBookAudit) -> AppResult<BookAudit> {
        sqlx::query_as::<_, BookAudit>(
            r#"
            UPDATE bookaudits
            SET book_id = $1, book_status = $2, changed_date = $3
            WHERE book_audit_id = $4
            RETURNING *
            "#,
        )
        .bind(audit.book_id)
        .bind(audit.book_status.as_str())
        .bind(audit.changed_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No book audit found with id {}", id)))
    }

    /// Delete an audit row by ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookaudits WHERE book_audit_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No book audit found with id {}", id)));
        }
        Ok(())
    }
}
