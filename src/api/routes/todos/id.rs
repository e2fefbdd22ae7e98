//! A single todo, identified by its ID.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::{
    api::{self, Json, Path, Response},
    id::TodoId,
    todo::Todo,
    AppState,
};

/// A `PATCH` request body for this API route.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PatchRequest {
    /// Whether the todo should be marked done.
    pub completed: bool,
}

/// Sets whether a todo is completed, leaving its other fields untouched.
///
/// # Errors
///
/// Responds with [`api::Error::TodoNotFound`] if no todo has the ID, or [`api::Error::BadRequest`]
/// if the ID or body is malformed or the store fails.
#[debug_handler]
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(body): Json<PatchRequest>,
) -> Response<Todo> {
    let Some(todo) = state
        .store
        .find_by_id_and_update(&id, body.completed)
        .await
        .map_err(|error| api::Error::BadRequest.caused_by("updating todo", &error))?
    else {
        return Err(api::Error::TodoNotFound);
    };

    Ok((StatusCode::OK, Json(todo)))
}

/// Deletes a todo.
///
/// # Errors
///
/// Responds with [`api::Error::TodoNotFound`] if no todo has the ID, or [`api::Error::BadRequest`]
/// if the ID is malformed or the store fails.
#[debug_handler]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Response<DeleteResponse> {
    let Some(todo) = state
        .store
        .find_by_id_and_delete(&id)
        .await
        .map_err(|error| api::Error::BadRequest.caused_by("deleting todo", &error))?
    else {
        return Err(api::Error::TodoNotFound);
    };

    tracing::info!(id = %todo.id, "Deleted todo");

    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            message: "Todo deleted",
        }),
    ))
}

/// A `DELETE` response body for this API route.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// A confirmation that the todo was deleted.
    pub message: &'static str,
}
