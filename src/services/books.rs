//! Book management service

use validator::Validate;

use crate::{
    error::{field_errors, validation_errors, AppError, AppResult},
    models::book::{Book, BookRef, CreateBook, UpdateBook},
    repository::Repository,
};

const DUPLICATE_TITLE_ISBN: &str = "A book with this title and ISBN already exists";

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn list_available(&self) -> AppResult<Vec<BookRef>> {
        self.repository.books.list_available().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Validate, guard the (title, isbn) natural key, then insert
    pub async fn create(&self, mut input: CreateBook) -> AppResult<Book> {
        input.normalize();
        input.validate().map_err(|e| validation_errors(e, CreateBook::FIELD_ORDER))?;

        if self
            .repository
            .books
            .title_isbn_exists(&input.title, &input.isbn)
            .await?
        {
            return Err(AppError::Conflict(field_errors(
                &["title", "isbn"],
                DUPLICATE_TITLE_ISBN,
            )));
        }

        self.repository.books.create(&input).await
    }

    pub async fn update(&self, id: i32, mut input: UpdateBook) -> AppResult<Book> {
        input.normalize();
        input.validate().map_err(|e| validation_errors(e, UpdateBook::FIELD_ORDER))?;

        self.repository.books.update(id, &input).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
