use chrono::{DateTime, NaiveDate, Utc};

use crate::database::{Connection, ErrorExt, Result};

#[tracing::instrument(skip(conn))]
pub async fn count(conn: &mut Connection) -> Result<i64> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Users""#)
        .fetch_one(conn)
        .await
        .into_db_error()
}

/// Registrations on one calendar day. The timestamp column is truncated
/// to its date before comparing, so the whole day matches.
#[tracing::instrument(skip(conn))]
pub async fn count_created_on(conn: &mut Connection, day: NaiveDate) -> Result<i64> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Users" WHERE created_at::date = $1"#)
        .bind(day)
        .fetch_one(conn)
        .await
        .into_db_error()
}

/// Registration timestamps with both endpoints whole-day inclusive.
/// A reversed range matches nothing.
#[tracing::instrument(skip(conn))]
pub async fn created_between(
    conn: &mut Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DateTime<Utc>>> {
    sqlx::query_scalar(
        r#"SELECT created_at FROM "Users" WHERE created_at::date >= $1 AND created_at::date <= $2"#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(conn)
    .await
    .into_db_error()
}
