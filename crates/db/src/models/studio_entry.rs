//! Studio entry models.

use owly_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `studio_entries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudioEntry {
    pub id: DbId,
    pub title: Option<String>,
    pub prompt: Option<String>,
    pub content_text: String,
    pub entry_type: Option<String>,
    pub category_id: Option<DbId>,
    pub subcategory_id: Option<DbId>,
    pub audio_path: Option<String>,
    pub created_at: Timestamp,
}

/// A studio entry enriched with category display names via LEFT JOIN.
///
/// Entries whose category or subcategory has been deleted still appear,
/// with the corresponding name `null` (the FK is set null on delete).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudioEntryWithNames {
    pub id: DbId,
    pub title: Option<String>,
    pub prompt: Option<String>,
    pub content_text: String,
    pub entry_type: Option<String>,
    pub category_id: Option<DbId>,
    pub subcategory_id: Option<DbId>,
    pub audio_path: Option<String>,
    pub created_at: Timestamp,
    pub category_name: Option<String>,
    pub subcategory_name: Option<String>,
}

/// DTO for inserting a new studio entry.
#[derive(Debug, Clone)]
pub struct CreateStudioEntry {
    pub title: Option<String>,
    pub prompt: Option<String>,
    pub content_text: String,
    pub entry_type: Option<String>,
    pub category_id: Option<DbId>,
    pub subcategory_id: Option<DbId>,
    pub audio_path: Option<String>,
}
