//! Handlers for studio entries (AI text drafting + TTS audio).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use owly_core::error::CoreError;
use owly_core::studio::{audio_filename, CategoryIdInput, DEFAULT_ENTRY_TYPE, DEFAULT_VOICE};
use owly_core::types::DbId;
use owly_db::models::studio_entry::{CreateStudioEntry, StudioEntry, StudioEntryWithNames};
use owly_db::repositories::StudioEntryRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::auth::SuccessResponse;
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Rows returned by the entries listing.
const LIST_LIMIT: i64 = 50;

/// Request body for `POST /api/admin/studio/draft`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(default)]
    pub prompt: String,
    pub entry_type: Option<String>,
}

/// Request body for `POST /api/admin/studio/audio`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub title: Option<String>,
    pub prompt: Option<String>,
    #[serde(default)]
    pub content_text: String,
    pub entry_type: Option<String>,
    pub category_id: Option<CategoryIdInput>,
    pub subcategory_id: Option<CategoryIdInput>,
    pub voice: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub entry: StudioEntry,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<StudioEntryWithNames>,
}

/// Trim an optional field to `None` when blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// POST /api/admin/studio/draft
///
/// Ask the adapter for a text draft. Nothing is persisted; the admin
/// reviews and edits the result before synthesizing audio.
pub async fn draft_text(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(input): Json<DraftRequest>,
) -> AppResult<Json<DraftResponse>> {
    let prompt = input.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Prompt is verplicht".into(),
        )));
    }
    let entry_type = non_blank(input.entry_type);
    let entry_type = entry_type.as_deref().unwrap_or(DEFAULT_ENTRY_TYPE);

    let text = state.studio.generate_text(prompt, entry_type).await?;
    Ok(Json(DraftResponse { text }))
}

/// POST /api/admin/studio/audio
///
/// Synthesize audio for the (possibly edited) content text, write it under
/// the public media directory, and insert the entry row referencing the
/// file's public path.
///
/// The file write and the insert are deliberately not one transaction: a
/// failed insert can orphan the file on disk, which is accepted (no
/// garbage collection pass exists).
pub async fn create_entry(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(input): Json<CreateEntryRequest>,
) -> AppResult<(StatusCode, Json<EntryResponse>)> {
    // Validate everything before touching the adapter, disk, or database.
    let category_id = resolve_id(input.category_id.as_ref())?;
    let subcategory_id = resolve_id(input.subcategory_id.as_ref())?;

    let content_text = input.content_text.trim().to_string();
    if content_text.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Tekst is verplicht".into(),
        )));
    }

    let voice = non_blank(input.voice);
    let voice = voice.as_deref().unwrap_or(DEFAULT_VOICE);

    let audio = state.studio.synthesize_speech(&content_text, voice).await?;

    let filename = audio_filename();
    let audio_dir = state.config.audio_dir();
    tokio::fs::create_dir_all(&audio_dir)
        .await
        .map_err(|e| AppError::Internal(format!("Kon audiomap niet aanmaken: {e}")))?;
    tokio::fs::write(audio_dir.join(&filename), &audio)
        .await
        .map_err(|e| AppError::Internal(format!("Kon audiobestand niet schrijven: {e}")))?;

    let entry = StudioEntryRepo::create(
        &state.pool,
        &CreateStudioEntry {
            title: non_blank(input.title),
            prompt: non_blank(input.prompt),
            content_text,
            entry_type: non_blank(input.entry_type),
            category_id,
            subcategory_id,
            audio_path: Some(format!("/studio-audio/{filename}")),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(EntryResponse { entry })))
}

fn resolve_id(input: Option<&CategoryIdInput>) -> Result<Option<DbId>, AppError> {
    match input {
        Some(raw) => Ok(raw.resolve()?),
        None => Ok(None),
    }
}

/// GET /api/admin/studio/entries
pub async fn list_entries(
    State(state): State<AppState>,
    _session: AdminSession,
) -> AppResult<Json<EntriesResponse>> {
    let entries = StudioEntryRepo::list_with_names(&state.pool, LIST_LIMIT).await?;
    Ok(Json(EntriesResponse { entries }))
}

/// DELETE /api/admin/studio/entries/{id}
///
/// Deletes the audio file first, then the row. A crash between the two
/// steps leaves an orphaned row whose path points nowhere; that trade-off
/// over orphaned files is intentional, and a missing file on delete is
/// not an error.
pub async fn delete_entry(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id: DbId = id
        .parse()
        .map_err(|_| CoreError::Validation("Ongeldig ID".into()))?;

    let entry = StudioEntryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Entry", id })?;

    if let Some(audio_path) = &entry.audio_path {
        let on_disk = state.config.public_path_on_disk(audio_path);
        match tokio::fs::remove_file(&on_disk).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %on_disk.display(), "audio file already gone");
            }
            Err(e) => {
                return Err(AppError::Internal(format!(
                    "Kon audiobestand niet verwijderen: {e}"
                )));
            }
        }
    }

    StudioEntryRepo::delete(&state.pool, id).await?;
    Ok(Json(SuccessResponse { success: true }))
}
