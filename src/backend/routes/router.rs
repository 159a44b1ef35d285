/**
 * Router Configuration
 *
 * Maps the four RPC operations onto HTTP endpoints. Every operation is a
 * POST with a JSON body, mirroring a synchronous request/response RPC
 * channel; unknown routes fall through to a plain 404.
 */
use axum::routing::post;
use axum::Router;

use crate::backend::facade::handlers::{handle_get, handle_login, handle_logout, handle_post};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Routes
///
/// - `POST /api/login` - authenticate and receive a session token
/// - `POST /api/logout` - end a session
/// - `POST /api/post` - create or update a document
/// - `POST /api/get` - list documents/active users, or forward an LLM query
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/api/login", post(handle_login))
        .route("/api/logout", post(handle_logout))
        .route("/api/post", post(handle_post))
        .route("/api/get", post(handle_get))
        .fallback(|| async { "404 Not Found" })
        .with_state(app_state)
}
