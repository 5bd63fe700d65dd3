use std::sync::Arc;

use owly_openai::StudioClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: owly_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Content generation adapter (text drafting, TTS, realtime secrets).
    pub studio: Arc<StudioClient>,
}
