//! Repository layer for database operations

pub mod author_books;
pub mod authors;
pub mod book_audits;
pub mod books;
pub mod loans;
pub mod members;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub loans: loans::LoansRepository,
    pub book_audits: book_audits::BookAuditsRepository,
    pub author_books: author_books::AuthorBooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            book_audits: book_audits::BookAuditsRepository::new(pool.clone()),
            author_books: author_books::AuthorBooksRepository::new(pool.clone()),
            pool,
        }
    }
}
