//! Authors repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{field_errors, is_unique_violation, AppError, AppResult},
    models::author::Author,
};

const DUPLICATE_NAME: &str = "An author with this first name and last name already exists";

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all authors ordered by primary key
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY author_id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE author_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No author found with id {}", id)))
    }

    /// Check if an author with this name pair already exists
    pub async fn name_exists(&self, first_name: &str, last_name: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM authors WHERE author_first_name = $1 AND author_last_name = $2)",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Insert a new author
    pub async fn create(&self, first_name: &str, last_name: &str) -> AppResult<Author> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (author_first_name, author_last_name)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(field_errors(&["first_name", "last_name"], DUPLICATE_NAME))
            } else {
                e.into()
            }
        })?;
        Ok(author)
    }

    /// Update an author by ID
    pub async fn update(&self, id: i32, first_name: &str, last_name: &str) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors
            SET author_first_name = $1, author_last_name = $2
            WHERE author_id = $3
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(field_errors(&["first_name", "last_name"], DUPLICATE_NAME))
            } else {
                e.into()
            }
        })?
        .ok_or_else(|| AppError::NotFound(format!("No author found with id {}", id)))
    }

    /// Delete an author by ID (links in authorsbooks cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE author_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No author found with id {}", id)));
        }
        Ok(())
    }
}
