//! Data models for NexaLibrium

pub mod author;
pub mod author_book;
pub mod book;
pub mod book_audit;
pub mod enums;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use author::Author;
pub use author_book::AuthorBook;
pub use book::Book;
pub use book_audit::BookAudit;
pub use enums::{BookStatus, LoanStatus};
pub use loan::Loan;
pub use member::Member;
