//! Repository for the `admin_sessions` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::session::AdminSession;

/// Column list for admin_sessions queries.
const COLUMNS: &str = "id, token, created_at";

/// Provides create/lookup/delete for server-side admin sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Create a new session with a random token, returning the row.
    pub async fn create(pool: &PgPool) -> Result<AdminSession, sqlx::Error> {
        let token = Uuid::new_v4();
        let query = format!(
            "INSERT INTO admin_sessions (token) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(token)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its cookie token.
    pub async fn find_by_token(
        pool: &PgPool,
        token: Uuid,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_sessions WHERE token = $1");
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session by token. Returns `true` if a row was deleted.
    pub async fn delete_by_token(pool: &PgPool, token: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token = $1")
            .bind(token)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
