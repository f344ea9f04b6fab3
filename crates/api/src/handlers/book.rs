//! Handlers for the `/books` resource.
//!
//! Every response embeds the book's author and category.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::book::{BookDetail, BookListParams, CreateBook, UpdateBook};
use catalog_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Book", id })
}

/// POST /api/v1/books
///
/// Responds 409 if `author_id` or `category_id` does not exist.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookDetail>)> {
    let book = BookRepo::create(&state.pool, &input).await?;
    tracing::info!(
        book_id = book.id,
        author_id = book.author_id,
        category_id = book.category_id,
        "Book created",
    );
    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /api/v1/books?skip=&limit=&title=&author=&category=&available=
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<BookListParams>,
) -> AppResult<Json<Vec<BookDetail>>> {
    let books = BookRepo::list(&state.pool, &params).await?;
    Ok(Json(books))
}

/// GET /api/v1/books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookDetail>> {
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(book))
}

/// PUT /api/v1/books/{id}
///
/// Full replacement: every field in the payload is written.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateBook>,
) -> AppResult<Json<BookDetail>> {
    let book = BookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(book_id = id, available = book.available, "Book updated");
    Ok(Json(book))
}

/// DELETE /api/v1/books/{id}
///
/// Returns the book as it was immediately before deletion.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookDetail>> {
    let book = BookRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(book_id = id, "Book deleted");
    Ok(Json(book))
}
