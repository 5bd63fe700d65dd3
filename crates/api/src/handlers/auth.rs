//! Handlers for the admin session gate (login, logout, session status).
//!
//! A single shared credential pair guards the admin panel; this is an
//! operational gate, not a multi-tenant auth system. Logging in inserts an
//! `admin_sessions` row and hands the browser its token in an HttpOnly
//! cookie; logging out deletes the row and clears the cookie.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use owly_core::error::CoreError;
use owly_db::repositories::SessionRepo;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{session_token, AdminSession, SESSION_COOKIE};
use crate::state::AppState;

/// Request body for `POST /api/admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response body for `GET /api/admin/session`.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// Response body for successful login/logout.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Compare a supplied credential against the expected one.
///
/// Both sides are hashed first so the comparison runs over fixed-length
/// digests instead of short-circuiting on the first differing byte of the
/// secret.
fn credential_matches(supplied: &str, expected: &str) -> bool {
    Sha256::digest(supplied.as_bytes()) == Sha256::digest(expected.as_bytes())
}

/// GET /api/admin/session
///
/// Report whether the caller currently holds a valid admin session.
/// Callable without authentication.
pub async fn session_status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<Json<SessionStatus>> {
    let authenticated = match session_token(&jar) {
        Some(token) => SessionRepo::find_by_token(&state.pool, token)
            .await?
            .is_some(),
        None => false,
    };
    Ok(Json(SessionStatus { authenticated }))
}

/// POST /api/admin/login
///
/// Authenticate against the shared admin credential pair. On success a new
/// session row is created and its token set as an HttpOnly cookie. The
/// failure message does not reveal which field was wrong.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    let username_ok = credential_matches(&input.username, &state.config.admin_username);
    let password_ok = credential_matches(&input.password, &state.config.admin_password);

    if !(username_ok && password_ok) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Ongeldige login".into(),
        )));
    }

    let session = SessionRepo::create(&state.pool).await?;
    tracing::info!(session_id = session.id, "admin logged in");

    let cookie = Cookie::build((SESSION_COOKIE, session.token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Json(SuccessResponse { success: true })))
}

/// POST /api/admin/logout
///
/// Destroy the caller's session entirely. Requires authentication;
/// subsequent requests with the old cookie are rejected by the gate.
pub async fn logout(
    State(state): State<AppState>,
    session: AdminSession,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    SessionRepo::delete_by_token(&state.pool, session.token).await?;
    tracing::info!(session_id = session.session_id, "admin logged out");

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();

    Ok((jar.remove(removal), Json(SuccessResponse { success: true })))
}
