//! Repository for the `studio_categories` table.

use owly_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

/// Column list for studio_categories queries.
const COLUMNS: &str = "id, name, parent_id, created_at";

/// Provides CRUD operations for categories and subcategories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories (both levels), ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM studio_categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM studio_categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a category, returning the created row.
    ///
    /// A `parent_id` of `None` creates a top-level category; `Some` creates
    /// a subcategory under that parent.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        parent_id: Option<DbId>,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO studio_categories (name, parent_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .bind(parent_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    ///
    /// Subcategories go with it (`ON DELETE CASCADE`); studio entries that
    /// referenced it survive with their FK set null.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM studio_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
