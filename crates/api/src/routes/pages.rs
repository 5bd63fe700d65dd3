//! Templated page routes and the health check, mounted at the root.
//!
//! ```text
//! GET /          -> home
//! GET /original  -> original
//! GET /extras    -> extras
//! GET /over-ons  -> over_ons
//! GET /health    -> health
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/original", get(pages::original))
        .route("/extras", get(pages::extras))
        .route("/over-ons", get(pages::over_ons))
        .route("/health", get(pages::health))
}
