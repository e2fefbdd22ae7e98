//! All routes for the HTTP API.

use axum::{
    routing::{get, patch},
    Router,
};

use crate::AppState;

pub mod todos;

/// Returns the API router.
pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todos", get(todos::get).post(todos::post))
        .route(
            "/api/todos/:id",
            patch(todos::id::patch).delete(todos::id::delete),
        )
}
