//! Author-book link endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::author_book::{AuthorBook, CreateAuthorBook},
};

use super::MessageResponse;

/// Link list query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct AuthorBookQuery {
    /// Restrict to one author's books
    pub author_id: Option<i32>,
}

/// List author-book links, optionally for a single author
#[utoipa::path(
    get,
    path = "/authors-books",
    tag = "authors-books",
    params(AuthorBookQuery),
    responses(
        (status = 200, description = "Author-book links", body = Vec<AuthorBook>),
        (status = 404, description = "Filtered author not found")
    )
)]
pub async fn list_author_books(
    State(state): State<crate::AppState>,
    Query(query): Query<AuthorBookQuery>,
) -> AppResult<Json<Vec<AuthorBook>>> {
    let links = match query.author_id {
        Some(author_id) => state.services.author_books.list_for_author(author_id).await?,
        None => state.services.author_books.list().await?,
    };
    Ok(Json(links))
}

/// Link an author to a book
#[utoipa::path(
    post,
    path = "/authors-books",
    tag = "authors-books",
    request_body = CreateAuthorBook,
    responses(
        (status = 201, description = "Link created", body = AuthorBook),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Author or book not found"),
        (status = 409, description = "Link already exists")
    )
)]
pub async fn create_author_book(
    State(state): State<crate::AppState>,
    Json(input): Json<CreateAuthorBook>,
) -> AppResult<(StatusCode, Json<AuthorBook>)> {
    let link = state.services.author_books.create(input).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Remove an author-book link
#[utoipa::path(
    delete,
    path = "/authors-books/{author_id}/{book_id}",
    tag = "authors-books",
    params(
        ("author_id" = i32, Path, description = "Author ID"),
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Link removed", body = MessageResponse),
        (status = 404, description = "Link not found")
    )
)]
pub async fn delete_author_book(
    State(state): State<crate::AppState>,
    Path((author_id, book_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    state.services.author_books.delete(author_id, book_id).await?;
    Ok(Json(MessageResponse {
        message: format!(
            "Author-book link ({}, {}) deleted successfully",
            author_id, book_id
        ),
    }))
}
