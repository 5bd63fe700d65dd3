//! Repository for the `studio_entries` table.

use owly_core::types::DbId;
use sqlx::PgPool;

use crate::models::studio_entry::{CreateStudioEntry, StudioEntry, StudioEntryWithNames};

/// Column list for studio_entries queries.
const COLUMNS: &str =
    "id, title, prompt, content_text, entry_type, category_id, subcategory_id, audio_path, created_at";

/// Provides CRUD operations for studio entries.
pub struct StudioEntryRepo;

impl StudioEntryRepo {
    /// Insert a new studio entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudioEntry,
    ) -> Result<StudioEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO studio_entries
                 (title, prompt, content_text, entry_type, category_id, subcategory_id, audio_path)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudioEntry>(&query)
            .bind(&input.title)
            .bind(&input.prompt)
            .bind(&input.content_text)
            .bind(&input.entry_type)
            .bind(input.category_id)
            .bind(input.subcategory_id)
            .bind(&input.audio_path)
            .fetch_one(pool)
            .await
    }

    /// List entries newest-first, enriched with category display names.
    ///
    /// LEFT JOINs keep entries whose category or subcategory was deleted;
    /// those come back with a null name.
    pub async fn list_with_names(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<StudioEntryWithNames>, sqlx::Error> {
        sqlx::query_as::<_, StudioEntryWithNames>(
            "SELECT e.id, e.title, e.prompt, e.content_text, e.entry_type,
                    e.category_id, e.subcategory_id, e.audio_path, e.created_at,
                    c.name AS category_name,
                    sc.name AS subcategory_name
             FROM studio_entries e
             LEFT JOIN studio_categories c ON e.category_id = c.id
             LEFT JOIN studio_categories sc ON e.subcategory_id = sc.id
             ORDER BY e.created_at DESC, e.id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Find a studio entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StudioEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM studio_entries WHERE id = $1");
        sqlx::query_as::<_, StudioEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a studio entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM studio_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all studio entries (used by tests and maintenance tooling).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM studio_entries")
            .fetch_one(pool)
            .await
    }
}
