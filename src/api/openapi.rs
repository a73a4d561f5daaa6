//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{author_books, authors, book_audits, books, health, loans, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NexaLibrium API",
        version = "1.0.0",
        description = "Library Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::list_available_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Members
        members::list_members,
        members::get_member,
        members::create_member,
        members::update_member,
        members::delete_member,
        // Loans
        loans::list_loans,
        loans::get_loan,
        loans::create_loan,
        loans::update_loan,
        loans::delete_loan,
        // Book audits
        book_audits::list_book_audits,
        book_audits::get_book_audit,
        book_audits::create_book_audit,
        book_audits::update_book_audit,
        book_audits::delete_book_audit,
        // Author-book links
        author_books::list_author_books,
        author_books::create_author_book,
        author_books::delete_author_book,
    ),
    components(
        schemas(
            // Shared
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
            health::HealthResponse,
            // Enums
            crate::models::enums::LoanStatus,
            crate::models::enums::BookStatus,
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            // Books
            crate::models::book::Book,
            crate::models::book::BookRef,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Members
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            crate::models::loan::UpdateLoan,
            // Book audits
            crate::models::book_audit::BookAudit,
            crate::models::book_audit::CreateBookAudit,
            crate::models::book_audit::UpdateBookAudit,
            // Author-book links
            crate::models::author_book::AuthorBook,
            crate::models::author_book::CreateAuthorBook,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book catalog"),
        (name = "members", description = "Member management"),
        (name = "loans", description = "Loan lifecycle"),
        (name = "bookaudits", description = "Book status audit trail"),
        (name = "authors-books", description = "Author-book links")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
