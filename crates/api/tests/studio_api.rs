//! HTTP-level integration tests for studio entry management.
//!
//! The test app's OpenAI client has no API key, so any request that
//! reaches the adapter fails with a 500 carrying the adapter's message;
//! validation failures must reject before that point and leave both the
//! media directory and the table untouched.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, login, post_json_auth};
use owly_db::models::studio_entry::CreateStudioEntry;
use owly_db::repositories::StudioEntryRepo;
use sqlx::PgPool;
use std::path::Path;

fn audio_file_count(public_dir: &Path) -> usize {
    std::fs::read_dir(public_dir.join("studio-audio"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}

async fn seed_entry(pool: &PgPool, title: &str, audio_path: Option<String>) -> i64 {
    StudioEntryRepo::create(
        pool,
        &CreateStudioEntry {
            title: Some(title.to_string()),
            prompt: None,
            content_text: "Er was eens een uil.".to_string(),
            entry_type: Some("verhaal".to_string()),
            category_id: None,
            subcategory_id: None,
            audio_path,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_draft_requires_prompt(pool: PgPool) {
    let (app, _public) = common::build_test_app(pool);
    let cookie = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/admin/studio/draft",
        serde_json::json!({ "prompt": "  ", "entryType": "verhaal" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Prompt is verplicht");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_draft_upstream_failure_is_surfaced(pool: PgPool) {
    let (app, _public) = common::build_test_app(pool);
    let cookie = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/admin/studio/draft",
        serde_json::json!({ "prompt": "een verhaal over een uil" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "OPENAI_API_KEY ontbreekt");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_entry_empty_text_writes_nothing(pool: PgPool) {
    let (app, public) = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/admin/studio/audio",
        serde_json::json!({ "contentText": "   ", "voice": "alloy" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Tekst is verplicht");

    assert_eq!(audio_file_count(public.path()), 0);
    assert_eq!(StudioEntryRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_entry_invalid_ids_rejected(pool: PgPool) {
    let (app, public) = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/admin/studio/audio",
        serde_json::json!({
            "contentText": "Er was eens een uil.",
            "categoryId": "abc",
            "voice": "alloy"
        }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Categorie-id's zijn ongeldig");

    assert_eq!(audio_file_count(public.path()), 0);
    assert_eq!(StudioEntryRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_entry_upstream_failure_writes_nothing(pool: PgPool) {
    let (app, public) = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/admin/studio/audio",
        serde_json::json!({ "contentText": "Er was eens een uil.", "voice": "alloy" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Synthesis failed before any file write or insert.
    assert_eq!(audio_file_count(public.path()), 0);
    assert_eq!(StudioEntryRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_entries(pool: PgPool) {
    let (app, _public) = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;

    seed_entry(&pool, "Eerste", None).await;
    seed_entry(&pool, "Tweede", None).await;

    let response = get_auth(app, "/api/admin/studio/entries", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["title"], "Tweede");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_entry_removes_file_and_row(pool: PgPool) {
    let (app, public) = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;

    let filename = "owly-studio-123-test.wav";
    let file_path = public.path().join("studio-audio").join(filename);
    std::fs::write(&file_path, b"RIFF").unwrap();

    let id = seed_entry(&pool, "Met audio", Some(format!("/studio-audio/{filename}"))).await;

    let response = delete_auth(app, &format!("/api/admin/studio/entries/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    assert!(!file_path.exists(), "audio file must be removed");
    assert!(StudioEntryRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_entry_with_missing_file_still_succeeds(pool: PgPool) {
    let (app, _public) = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;

    let id = seed_entry(
        &pool,
        "Zonder bestand",
        Some("/studio-audio/verdwenen.wav".to_string()),
    )
    .await;

    let response = delete_auth(app, &format!("/api/admin/studio/entries/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(StudioEntryRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_entry_is_404_and_touches_nothing(pool: PgPool) {
    let (app, public) = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;

    let keep = public.path().join("studio-audio").join("blijft.wav");
    std::fs::write(&keep, b"RIFF").unwrap();
    seed_entry(&pool, "Blijft", Some("/studio-audio/blijft.wav".to_string())).await;

    let response = delete_auth(app, "/api/admin/studio/entries/999999", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Entry niet gevonden");

    assert!(keep.exists());
    assert_eq!(StudioEntryRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_entry_invalid_id_is_400(pool: PgPool) {
    let (app, _public) = common::build_test_app(pool);
    let cookie = login(app.clone()).await;

    let response = delete_auth(app, "/api/admin/studio/entries/abc", &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Ongeldig ID");
}
