//! Loan management endpoints
//!
//! Creating, editing, or deleting a loan also rewrites the book's
//! availability (and its audit trail where one exists); see the loans
//! repository for the propagation sequence.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, UpdateLoan},
};

use super::MessageResponse;

/// List all loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "All loans, primary key ascending", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.services.loans.list().await?;
    Ok(Json(loans))
}

/// Get loan by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.get_by_id(id).await?;
    Ok(Json(loan))
}

/// Check out a book
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created, book marked unavailable", body = Loan),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book or member not found"),
        (status = 409, description = "Loan for this book and member already exists")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    Json(input): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let loan = state.services.loans.create(input).await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// Update a loan (returning it frees the book)
#[utoipa::path(
    put,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    request_body = UpdateLoan,
    responses(
        (status = 200, description = "Loan updated, book availability follows the status", body = Loan),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn update_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateLoan>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.update(id, input).await?;
    Ok(Json(loan))
}

/// Delete a loan, reverting the book to available
#[utoipa::path(
    delete,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan deleted, book reverted to available", body = MessageResponse),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn delete_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.loans.delete(id).await?;
    Ok(Json(MessageResponse::deleted("Loan", id)))
}
