//! Book audit endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::book_audit::{BookAudit, CreateBookAudit, UpdateBookAudit},
};

use super::MessageResponse;

/// Audit list query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookAuditQuery {
    /// Restrict to one book's audit trail
    pub book_id: Option<i32>,
}

/// List audit rows, optionally for a single book
#[utoipa::path(
    get,
    path = "/bookaudits",
    tag = "bookaudits",
    params(BookAuditQuery),
    responses(
        (status = 200, description = "Audit rows, primary key ascending", body = Vec<BookAudit>),
        (status = 404, description = "Filtered book not found")
    )
)]
pub async fn list_book_audits(
    State(state): State<crate::AppState>,
    Query(query): Query<BookAuditQuery>,
) -> AppResult<Json<Vec<BookAudit>>> {
    let audits = match query.book_id {
        Some(book_id) => state.services.book_audits.list_for_book(book_id).await?,
        None => state.services.book_audits.list().await?,
    };
    Ok(Json(audits))
}

/// Get audit row by ID
#[utoipa::path(
    get,
    path = "/bookaudits/{id}",
    tag = "bookaudits",
    params(
        ("id" = i32, Path, description = "Book audit ID")
    ),
    responses(
        (status = 200, description = "Audit row", body = BookAudit),
        (status = 404, description = "Audit row not found")
    )
)]
pub async fn get_book_audit(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookAudit>> {
    let audit = state.services.book_audits.get_by_id(id).await?;
    Ok(Json(audit))
}

/// Record a status snapshot for a book
#[utoipa::path(
    post,
    path = "/bookaudits",
    tag = "bookaudits",
    request_body = CreateBookAudit,
    responses(
        (status = 201, description = "Audit row created", body = BookAudit),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Identical snapshot already recorded")
    )
)]
pub async fn create_book_audit(
    State(state): State<crate::AppState>,
    Json(input): Json<CreateBookAudit>,
) -> AppResult<(StatusCode, Json<BookAudit>)> {
    let audit = state.services.book_audits.create(input).await?;
    Ok((StatusCode::CREATED, Json(audit)))
}

/// Update an audit row
#[utoipa::path(
    put,
    path = "/bookaudits/{id}",
    tag = "bookaudits",
    params(
        ("id" = i32, Path, description = "Book audit ID")
    ),
    request_body = UpdateBookAudit,
    responses(
        (status = 200, description = "Audit row updated", body = BookAudit),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Audit row not found")
    )
)]
pub async fn update_book_audit(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateBookAudit>,
) -> AppResult<Json<BookAudit>> {
    let audit = state.services.book_audits.update(id, input).await?;
    Ok(Json(audit))
}

/// Delete an audit row
#[utoipa::path(
    delete,
    path = "/bookaudits/{id}",
    tag = "bookaudits",
    params(
        ("id" = i32, Path, description = "Book audit ID")
    ),
    responses(
        (status = 200, description = "Audit row deleted", body = MessageResponse),
        (status = 404, description = "Audit row not found")
    )
)]
pub async fn delete_book_audit(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.book_audits.delete(id).await?;
    Ok(Json(MessageResponse::deleted("Book audit", id)))
}
