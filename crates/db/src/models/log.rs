//! Conversation log models.

use owly_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `owly_logs` table. Rows are immutable after creation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ConversationLog {
    pub id: DbId,
    pub first_name: String,
    pub age: Option<i32>,
    pub summary: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new conversation log.
#[derive(Debug, Clone)]
pub struct CreateLog {
    pub first_name: String,
    pub age: Option<i32>,
    /// Flattened (newline-joined) summary, already validated by core.
    pub summary: String,
}

/// Conjunctive filter for the admin log query.
///
/// Every supplied predicate is AND-ed; `None` fields are skipped. Name and
/// summary matches are case-insensitive substring matches, the date range
/// is inclusive on both ends.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub first_name: Option<String>,
    pub age: Option<i32>,
    pub summary: Option<String>,
    pub date_from: Option<Timestamp>,
    pub date_to: Option<Timestamp>,
    /// Row cap; callers fall back to 50 for missing or non-positive input.
    pub limit: i64,
}
