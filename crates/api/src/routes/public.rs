//! Public (unauthenticated) API routes, mounted at `/api`.
//!
//! ```text
//! POST /logs   -> append_log (voice client posts a session summary)
//! GET  /token  -> create_token (ephemeral realtime credential)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{logs, token};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logs", post(logs::append_log))
        .route("/token", get(token::create_token))
}
