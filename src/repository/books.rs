//! Books repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{field_errors, is_unique_violation, AppError, AppResult},
    models::{
        book::{Book, BookRef, CreateBook, UpdateBook},
        enums::BookStatus,
    },
};

const DUPLICATE_TITLE_ISBN: &str = "A book with this title and ISBN already exists";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books ordered by primary key
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY book_id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// List books currently available for checkout (foreign-key picker feed)
    pub async fn list_available(&self) -> AppResult<Vec<BookRef>> {
        let books = sqlx::query_as::<_, BookRef>(
            "SELECT book_id, title FROM books WHERE book_status = $1 ORDER BY book_id ASC",
        )
        .bind(BookStatus::Available.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE book_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No book found with id {}", id)))
    }

    /// Check if a book with this title and ISBN already exists
    pub async fn title_isbn_exists(&self, title: &str, isbn: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM books WHERE title = $1 AND isbn = $2)",
        )
        .bind(title)
        .bind(isbn)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Insert a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let status = book.book_status.unwrap_or(BookStatus::Available);
        let changed_date = book.changed_date.unwrap_or_else(Utc::now);

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, isbn, book_category, book_type, book_status, changed_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(&book.book_category)
        .bind(&book.book_type)
        .bind(status.as_str())
        .bind(changed_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(field_errors(&["title", "isbn"], DUPLICATE_TITLE_ISBN))
            } else {
                e.into()
            }
        })?;
        Ok(book)
    }

    /// Update a book by ID
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        let changed_date = book.changed_date.unwrap_or_else(Utc::now);

        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, isbn = $2, book_category = $3, book_type = $4,
                book_status = $5, changed_date = $6
            WHERE book_id = $7
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(&book.book_category)
        .bind(&book.book_type)
        .bind(book.book_status.as_str())
        .bind(changed_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(field_errors(&["title", "isbn"], DUPLICATE_TITLE_ISBN))
            } else {
                e.into()
            }
        })?
        .ok_or_else(|| AppError::NotFound(format!("No book found with id {}", id)))
    }

    /// Delete a book by ID (loans and audit rows cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No book found with id {}", id)));
        }
        Ok(())
    }
}
