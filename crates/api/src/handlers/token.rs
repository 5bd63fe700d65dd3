//! Handler for the ephemeral realtime voice credential.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// GET /api/token (public)
///
/// Ask OpenAI for a short-lived realtime client secret and hand it to the
/// browser. The upstream failure detail is logged but not surfaced; the
/// voice client only needs to know the token is unavailable.
pub async fn create_token(State(state): State<AppState>) -> AppResult<Json<TokenResponse>> {
    let api_key = state.studio.create_realtime_secret().await.map_err(|e| {
        tracing::error!(error = %e, "failed to create realtime client secret");
        AppError::Internal("Failed to create client secret".into())
    })?;

    Ok(Json(TokenResponse { api_key }))
}
