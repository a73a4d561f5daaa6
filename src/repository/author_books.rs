//! Author-book links repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{field_errors, is_unique_violation, AppError, AppResult},
    models::author_book::AuthorBook,
};

const DUPLICATE_LINK: &str = "This author is already linked to this book";

#[derive(Clone)]
pub struct AuthorBooksRepository {
    pool: Pool<Postgres>,
}

impl AuthorBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all author-book links ordered by the composite key
    pub async fn list(&self) -> AppResult<Vec<AuthorBook>> {
        let links = sqlx::query_as::<_, AuthorBook>(
            "SELECT author_id, book_id FROM authorsbooks ORDER BY author_id ASC, book_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    /// List the books linked to one author
    pub async fn list_for_author(&self, author_id: i32) -> AppResult<Vec<AuthorBook>> {
        let links = sqlx::query_as::<_, AuthorBook>(
            "SELECT author_id, book_id FROM authorsbooks WHERE author_id = $1 ORDER BY book_id ASC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    /// Insert a new link (the table's composite primary key is the guard)
    pub async fn create(&self, author_id: i32, book_id: i32) -> AppResult<AuthorBook> {
        let link = sqlx::query_as::<_, AuthorBook>(
            r#"
            INSERT INTO authorsbooks (author_id, book_id)
            VALUES ($1, $2)
            RETURNING author_id, book_id
            "#,
        )
        .bind(author_id)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(field_errors(&["author_id", "book_id"], DUPLICATE_LINK))
            } else {
                e.into()
            }
        })?;
        Ok(link)
    }

    /// Delete a link by its composite key
    pub async fn delete(&self, author_id: i32, book_id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authorsbooks WHERE author_id = $1 AND book_id = $2")
            .bind(author_id)
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "No author-book link found for author {} and book {}",
                author_id, book_id
            )));
        }
        Ok(())
    }
}
