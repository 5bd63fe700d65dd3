//! Admin session model.

use owly_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `admin_sessions` table.
///
/// The row's existence is the authenticated flag: login inserts one, logout
/// deletes it, and the browser holds `token` in an HttpOnly cookie.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub token: Uuid,
    pub created_at: Timestamp,
}
