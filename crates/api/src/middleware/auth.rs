//! Cookie-session authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use owly_core::error::CoreError;
use owly_core::types::DbId;
use owly_db::repositories::SessionRepo;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the HttpOnly session cookie.
pub const SESSION_COOKIE: &str = "owly_session";

/// Authenticated admin session, extracted from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires the
/// admin gate; extraction fails with 401 when the cookie is missing,
/// malformed, or references no session row:
///
/// ```ignore
/// async fn my_handler(_session: AdminSession) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Database id of the session row.
    pub session_id: DbId,
    /// The cookie token identifying the session.
    pub token: Uuid,
}

/// The single rejection used for every failed gate check. Deliberately
/// does not distinguish missing cookie from stale token.
fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized("Niet gemachtigd".into()))
}

/// Parse the session token from the request's cookies, if present.
pub fn session_token(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar).ok_or_else(unauthorized)?;

        let session = SessionRepo::find_by_token(&state.pool, token)
            .await?
            .ok_or_else(unauthorized)?;

        Ok(AdminSession {
            session_id: session.id,
            token,
        })
    }
}
