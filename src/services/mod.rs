//! Business logic services

pub mod author_books;
pub mod authors;
pub mod book_audits;
pub mod books;
pub mod loans;
pub mod members;

use sqlx::{Pool, Postgres};

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub members: members::MembersService,
    pub loans: loans::LoansService,
    pub book_audits: book_audits::BookAuditsService,
    pub author_books: author_books::AuthorBooksService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            pool: repository.pool.clone(),
            authors: authors::AuthorsService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            members: members::MembersService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            book_audits: book_audits::BookAuditsService::new(repository.clone()),
            author_books: author_books::AuthorBooksService::new(repository),
        }
    }
}
