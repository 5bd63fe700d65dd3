//! Handlers for conversation logs.
//!
//! Creation is public (the voice client posts a summary when a session
//! ends); querying is admin-gated.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, TimeZone, Utc};
use owly_core::error::CoreError;
use owly_core::logs::{validate_first_name, validate_summary, SummaryInput};
use owly_core::types::Timestamp;
use owly_db::models::log::{ConversationLog, CreateLog, LogFilter};
use owly_db::repositories::LogRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Fallback row cap for the admin query.
const DEFAULT_LIMIT: i64 = 50;

/// Request body for the public `POST /api/logs`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendLogRequest {
    #[serde(default)]
    pub first_name: String,
    pub age: Option<i32>,
    pub summary: Option<SummaryInput>,
}

/// Query parameters for `GET /api/admin/logs`.
///
/// Everything arrives as strings; parsing is lenient and maps bad numeric
/// or date input to a 400 rather than axum's default rejection, so the
/// admin panel always gets `{error}` bodies.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQueryParams {
    pub first_name: Option<String>,
    pub age: Option<String>,
    pub summary: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub log: ConversationLog,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: Vec<ConversationLog>,
}

/// POST /api/logs (public)
///
/// Store the summary of a completed voice session. The summary may be a
/// pre-joined text block or an ordered list of bullet lines.
pub async fn append_log(
    State(state): State<AppState>,
    Json(input): Json<AppendLogRequest>,
) -> AppResult<(StatusCode, Json<LogResponse>)> {
    let first_name = input.first_name.trim().to_string();
    validate_first_name(&first_name)?;

    let summary = input
        .summary
        .as_ref()
        .map(SummaryInput::flatten)
        .unwrap_or_default();
    validate_summary(&summary)?;

    let log = LogRepo::create(
        &state.pool,
        &CreateLog {
            first_name,
            age: input.age,
            summary,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(LogResponse { log })))
}

/// GET /api/admin/logs
///
/// Conjunctive filtered search, newest-first. A missing or non-positive
/// limit falls back to 50.
pub async fn query_logs(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(params): Query<LogQueryParams>,
) -> AppResult<Json<LogsResponse>> {
    let filter = build_filter(&params)?;
    let logs = LogRepo::search(&state.pool, &filter).await?;
    Ok(Json(LogsResponse { logs }))
}

fn build_filter(params: &LogQueryParams) -> Result<LogFilter, AppError> {
    let age = match non_blank(params.age.as_deref()) {
        Some(raw) => Some(
            raw.parse::<i32>()
                .map_err(|_| CoreError::Validation("Leeftijd is ongeldig".into()))?,
        ),
        None => None,
    };

    let date_from = parse_date(params.date_from.as_deref(), "dateFrom")?;
    let date_to = parse_date(params.date_to.as_deref(), "dateTo")?;

    let limit = params
        .limit
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_LIMIT);

    Ok(LogFilter {
        first_name: non_blank(params.first_name.as_deref()),
        age,
        summary: non_blank(params.summary.as_deref()),
        date_from,
        date_to,
        limit,
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse a filter date: RFC 3339 datetimes and plain `YYYY-MM-DD` dates
/// are both accepted; a bare date means midnight UTC, matching how the
/// admin panel's date inputs have always been interpreted.
fn parse_date(value: Option<&str>, field: &str) -> Result<Option<Timestamp>, AppError> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };

    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(datetime.with_timezone(&Utc)));
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
        return Ok(Some(Utc.from_utc_datetime(&midnight)));
    }

    Err(AppError::Core(CoreError::Validation(format!(
        "{field} is geen geldige datum"
    ))))
}
