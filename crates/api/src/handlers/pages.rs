//! Handlers for the templated HTML pages and the health check.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use chrono::Datelike;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::template::render_file;

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_page(&state, "index").await
}

/// GET /original
pub async fn original(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_page(&state, "original").await
}

/// GET /extras
pub async fn extras(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_page(&state, "extras").await
}

/// GET /over-ons
pub async fn over_ons(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_page(&state, "over-ons").await
}

/// Render `<templates_dir>/<name>.html` with the shared page parameters.
async fn render_page(state: &AppState, name: &str) -> AppResult<Html<String>> {
    let year = chrono::Utc::now().year().to_string();
    let params: [(&str, &str); 2] = [("page", name), ("year", &year)];

    let path = state.config.templates_dir.join(format!("{name}.html"));
    let html = render_file(&path, &params).await.map_err(|e| {
        tracing::error!(template = name, error = %e, "failed to render page template");
        AppError::Internal("Pagina kon niet geladen worden".into())
    })?;

    Ok(Html(html))
}
