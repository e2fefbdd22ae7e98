//! The set of all todos.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;
use serde::Deserialize;

use crate::{
    api::{self, validation::TodoText, Json, Response},
    todo::Todo,
    AppState,
};

pub mod id;

/// Lists every todo.
///
/// # Errors
///
/// Responds with [`api::Error::Server`] if the store fails.
#[debug_handler]
pub async fn get(State(state): State<AppState>) -> Response<Vec<Todo>> {
    let todos = state
        .store
        .find_all()
        .await
        .map_err(|error| api::Error::Server.caused_by("fetching todos", &error))?;

    Ok((StatusCode::OK, Json(todos)))
}

/// A `POST` request body for this API route.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    /// The new todo's text.
    pub text: TodoText,
}

/// Creates a new incomplete todo.
///
/// # Errors
///
/// Responds with [`api::Error::BadRequest`] if the text is missing or empty, or if the store
/// rejects the todo. Nothing is persisted in either case.
#[debug_handler]
pub async fn post(
    State(state): State<AppState>,
    Json(body): Json<PostRequest>,
) -> Response<Todo> {
    let todo = state
        .store
        .create(body.text)
        .await
        .map_err(|error| api::Error::BadRequest.caused_by("creating todo", &error))?;

    tracing::info!(id = %todo.id, "Created todo");

    Ok((StatusCode::CREATED, Json(todo)))
}
