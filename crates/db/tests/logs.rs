//! Integration tests for the conversation log repository.
//!
//! The search filter is conjunctive: every supplied predicate narrows the
//! result. These tests pin the substring/case-insensitivity semantics and
//! the newest-first ordering.

use chrono::{Duration, Utc};
use owly_db::models::log::{CreateLog, LogFilter};
use owly_db::repositories::LogRepo;
use sqlx::PgPool;

fn new_log(first_name: &str, age: Option<i32>, summary: &str) -> CreateLog {
    CreateLog {
        first_name: first_name.to_string(),
        age,
        summary: summary.to_string(),
    }
}

async fn seed(pool: &PgPool) {
    for (name, age, summary) in [
        ("Anna", Some(8), "praatte over dinosaurussen\nvroeg naar vulkanen"),
        ("Hannah", Some(7), "zong een liedje over de zee"),
        ("Bob", Some(8), "telde tot honderd"),
    ] {
        LogRepo::create(pool, &new_log(name, age, summary))
            .await
            .unwrap();
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_first_name_filter_is_case_insensitive_substring(pool: PgPool) {
    seed(&pool).await;

    let filter = LogFilter {
        first_name: Some("ann".to_string()),
        limit: 50,
        ..Default::default()
    };
    let logs = LogRepo::search(&pool, &filter).await.unwrap();

    let names: Vec<&str> = logs.iter().map(|l| l.first_name.as_str()).collect();
    assert!(names.contains(&"Anna"));
    assert!(names.contains(&"Hannah"));
    assert!(!names.contains(&"Bob"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_filters_are_conjunctive(pool: PgPool) {
    seed(&pool).await;

    // age=8 alone matches Anna and Bob; adding the name filter leaves Anna.
    let filter = LogFilter {
        first_name: Some("ann".to_string()),
        age: Some(8),
        limit: 50,
        ..Default::default()
    };
    let logs = LogRepo::search(&pool, &filter).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].first_name, "Anna");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_summary_filter_matches_substring(pool: PgPool) {
    seed(&pool).await;

    let filter = LogFilter {
        summary: Some("VULKANEN".to_string()),
        limit: 50,
        ..Default::default()
    };
    let logs = LogRepo::search(&pool, &filter).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].first_name, "Anna");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_date_range_is_inclusive(pool: PgPool) {
    seed(&pool).await;
    let now = Utc::now();

    let filter = LogFilter {
        date_from: Some(now - Duration::minutes(5)),
        date_to: Some(now + Duration::minutes(5)),
        limit: 50,
        ..Default::default()
    };
    assert_eq!(LogRepo::search(&pool, &filter).await.unwrap().len(), 3);

    let filter = LogFilter {
        date_to: Some(now - Duration::days(1)),
        limit: 50,
        ..Default::default()
    };
    assert!(LogRepo::search(&pool, &filter).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_no_filter_returns_newest_first_capped(pool: PgPool) {
    for i in 0..4 {
        LogRepo::create(&pool, &new_log(&format!("Kind{i}"), None, "samenvatting"))
            .await
            .unwrap();
    }

    let filter = LogFilter {
        limit: 2,
        ..Default::default()
    };
    let logs = LogRepo::search(&pool, &filter).await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].first_name, "Kind3");
    assert_eq!(logs[1].first_name, "Kind2");
}
