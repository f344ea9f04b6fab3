pub mod author;
pub mod book;
pub mod category;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /authors                 list, create
/// /authors/{id}            get, update, delete
///
/// /categories              list, create
/// /categories/{id}         get, update, delete
///
/// /books                   list (filters: title, author, category, available), create
/// /books/{id}              get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/authors", author::router())
        .nest("/categories", category::router())
        .nest("/books", book::router())
}
