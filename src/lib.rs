//! A small HTTP API for managing a list of todos, backed by PostgreSQL.

pub mod api;
pub mod config;
pub mod id;
pub mod store;
pub mod todo;
mod website;

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub use crate::{config::Config, store::TodoStore, todo::Todo, website::BANNER};

/// The state shared by all route handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Where todos are persisted.
    pub store: Arc<dyn TodoStore>,
}

/// Builds the service handling every route, persisting todos to the specified store and allowing
/// cross-origin requests only from `client_origin`.
pub fn app(store: Arc<dyn TodoStore>, client_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(client_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(website::get))
        .merge(api::routes::router())
        .fallback(|| async { api::Error::RouteNotFound })
        .with_state(AppState { store })
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
