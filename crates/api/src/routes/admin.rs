//! Route definitions for the admin panel API, mounted at `/api/admin`.
//!
//! Session and login are public; everything else requires the
//! `AdminSession` extractor and rejects with 401 otherwise.
//!
//! ```text
//! GET    /session                              -> session_status (public)
//! POST   /login                                -> login (public)
//! POST   /logout                               -> logout
//!
//! GET    /categories                           -> list_categories
//! POST   /categories                           -> create_category
//! POST   /categories/{parentId}/subcategories  -> create_subcategory
//! DELETE /categories/{id}                      -> delete_category
//!
//! POST   /studio/draft                         -> draft_text
//! POST   /studio/audio                         -> create_entry
//! GET    /studio/entries                       -> list_entries
//! DELETE /studio/entries/{id}                  -> delete_entry
//!
//! GET    /logs                                 -> query_logs
//! ```

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{auth, categories, logs, studio};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", get(auth::session_status))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{parentId}/subcategories",
            post(categories::create_subcategory),
        )
        .route("/categories/{id}", delete(categories::delete_category))
        .route("/studio/draft", post(studio::draft_text))
        .route("/studio/audio", post(studio::create_entry))
        .route("/studio/entries", get(studio::list_entries))
        .route("/studio/entries/{id}", delete(studio::delete_entry))
        .route("/logs", get(logs::query_logs))
}
