//! The HTTP API, exposed under `/api/`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_macros::{FromRequest, FromRequestParts};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::store;

pub mod routes;
pub mod validation;

/// An API error, responded with as a JSON body of the form `{"error": "..."}`.
///
/// The message is deliberately generic. Any underlying cause is logged rather than returned.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request was malformed, or the store rejected the operation.
    #[error("Bad request")]
    BadRequest,

    /// No todo exists with the requested ID.
    #[error("Todo not found")]
    TodoNotFound,

    /// The requested API route doesn't exist.
    #[error("Route not found")]
    RouteNotFound,

    /// The store failed unexpectedly.
    #[error("Server error")]
    Server,
}

impl Error {
    /// Returns the HTTP response status code corresponding to this error.
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::TodoNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the store error behind this API error, then returns this API error.
    pub(crate) fn caused_by(self, action: &str, source: &store::Error) -> Self {
        tracing::error!(error = %source, "Error {action}");

        self
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status(), axum::Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "Rejected request body");

        Self::BadRequest
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "Rejected request path");

        Self::BadRequest
    }
}

/// An API request or response body in JSON. Rejections are responded with as [`Error::BadRequest`].
#[derive(FromRequest, Clone, Copy, Default, Debug)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Extracts API route path parameters. Rejections are responded with as [`Error::BadRequest`].
#[derive(FromRequestParts, Clone, Copy, Debug)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

/// The result of an API route handler.
pub type Response<T> = Result<(StatusCode, Json<T>), Error>;
