//! The plain text banner served at `/`, outside the HTTP API.

use axum_macros::debug_handler;

/// The banner text.
pub const BANNER: &str = "Todo API is running. Use /api/todos for endpoints.";

/// Responds with the banner, letting clients check the server is up.
#[allow(clippy::unused_async)] // Axum route handlers must be async.
#[debug_handler]
pub(crate) async fn get() -> &'static str {
    BANNER
}
