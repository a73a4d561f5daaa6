//! Author-book link service

use validator::Validate;

use crate::{
    error::{validation_errors, AppResult},
    models::author_book::{AuthorBook, CreateAuthorBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorBooksService {
    repository: Repository,
}

impl AuthorBooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<AuthorBook>> {
        self.repository.author_books.list().await
    }

    pub async fn list_for_author(&self, author_id: i32) -> AppResult<Vec<AuthorBook>> {
        self.repository.authors.get_by_id(author_id).await?;
        self.repository.author_books.list_for_author(author_id).await
    }

    /// Link an author to a book; the composite primary key rejects repeats
    pub async fn create(&self, input: CreateAuthorBook) -> AppResult<AuthorBook> {
        input.validate().map_err(|e| validation_errors(e, CreateAuthorBook::FIELD_ORDER))?;

        self.repository.authors.get_by_id(input.author_id).await?;
        self.repository.books.get_by_id(input.book_id).await?;

        self.repository
            .author_books
            .create(input.author_id, input.book_id)
            .await
    }

    pub async fn delete(&self, author_id: i32, book_id: i32) -> AppResult<()> {
        self.repository.author_books.delete(author_id, book_id).await
    }
}
