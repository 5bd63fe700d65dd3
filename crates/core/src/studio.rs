//! Validation and naming rules for studio entries.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Default voice used for audio synthesis when the admin picks none.
pub const DEFAULT_VOICE: &str = "alloy";

/// Default entry type for text drafting.
pub const DEFAULT_ENTRY_TYPE: &str = "verhaal";

/// A category/subcategory reference as submitted by the admin panel.
///
/// The panel's `<select>` elements submit ids as strings, while API clients
/// may send numbers; both are accepted. An empty string means "no category"
/// (the panel's placeholder option).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryIdInput {
    Number(DbId),
    Text(String),
}

impl CategoryIdInput {
    /// Resolve to an optional id, rejecting non-numeric text.
    pub fn resolve(&self) -> Result<Option<DbId>, CoreError> {
        match self {
            CategoryIdInput::Number(id) => Ok(Some(*id)),
            CategoryIdInput::Text(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Ok(None);
                }
                raw.parse::<DbId>().map(Some).map_err(|_| {
                    CoreError::Validation("Categorie-id's zijn ongeldig".into())
                })
            }
        }
    }
}

/// Build a collision-resistant public filename for a synthesized WAV file.
///
/// A plain timestamp collides when two admins synthesize within the same
/// millisecond, so a random suffix is appended.
pub fn audio_filename() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("owly-studio-{millis}-{}.wav", &suffix[..8])
}
