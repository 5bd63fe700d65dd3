//! Category model.
//!
//! One self-referencing table holds both categories and subcategories; a
//! row with a `parent_id` is a subcategory. The API materializes the flat
//! result into a tree via `owly_core::tree`.

use owly_core::tree::AdjacencyRow;
use owly_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `studio_categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub parent_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl AdjacencyRow for Category {
    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.parent_id
    }
}
