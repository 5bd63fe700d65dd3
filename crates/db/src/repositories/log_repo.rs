//! Repository for the `owly_logs` table.

use sqlx::{PgPool, QueryBuilder};

use crate::models::log::{ConversationLog, CreateLog, LogFilter};

/// Column list for owly_logs queries.
const COLUMNS: &str = "id, first_name, age, summary, created_at";

/// Provides insert and filtered search over conversation logs.
pub struct LogRepo;

impl LogRepo {
    /// Insert a new conversation log, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLog) -> Result<ConversationLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO owly_logs (first_name, age, summary)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConversationLog>(&query)
            .bind(&input.first_name)
            .bind(input.age)
            .bind(&input.summary)
            .fetch_one(pool)
            .await
    }

    /// Search logs with a conjunctive filter, newest-first.
    ///
    /// Predicates are assembled with [`QueryBuilder`] so every user value is
    /// a bound parameter, never spliced into the SQL text. `ILIKE` gives the
    /// case-insensitive substring semantics for name and summary.
    pub async fn search(
        pool: &PgPool,
        filter: &LogFilter,
    ) -> Result<Vec<ConversationLog>, sqlx::Error> {
        let mut qb: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM owly_logs WHERE TRUE"));

        if let Some(first_name) = &filter.first_name {
            qb.push(" AND first_name ILIKE ");
            qb.push_bind(format!("%{first_name}%"));
        }
        if let Some(age) = filter.age {
            qb.push(" AND age = ");
            qb.push_bind(age);
        }
        if let Some(summary) = &filter.summary {
            qb.push(" AND summary ILIKE ");
            qb.push_bind(format!("%{summary}%"));
        }
        if let Some(date_from) = filter.date_from {
            qb.push(" AND created_at >= ");
            qb.push_bind(date_from);
        }
        if let Some(date_to) = filter.date_to {
            qb.push(" AND created_at <= ");
            qb.push_bind(date_to);
        }

        qb.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        qb.push_bind(filter.limit);

        qb.build_query_as::<ConversationLog>().fetch_all(pool).await
    }
}
