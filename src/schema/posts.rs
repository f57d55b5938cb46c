use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::database::{Connection, ErrorExt, Result};

/// One post row joined with its author's display name.
///
/// The join is a LEFT JOIN on purpose: a dangling `author_id` surfaces
/// as a `NULL` name instead of dropping the row.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct PostAuthorRow {
    pub author_id: i64,
    pub name: Option<String>,
}

#[tracing::instrument(skip(conn))]
pub async fn count(conn: &mut Connection) -> Result<i64> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Posts""#)
        .fetch_one(conn)
        .await
        .into_db_error()
}

#[tracing::instrument(skip(conn))]
pub async fn count_created_on(conn: &mut Connection, day: NaiveDate) -> Result<i64> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Posts" WHERE created_at::date = $1"#)
        .bind(day)
        .fetch_one(conn)
        .await
        .into_db_error()
}

#[tracing::instrument(skip(conn))]
pub async fn created_between(
    conn: &mut Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DateTime<Utc>>> {
    sqlx::query_scalar(
        r#"SELECT created_at FROM "Posts" WHERE created_at::date >= $1 AND created_at::date <= $2"#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(conn)
    .await
    .into_db_error()
}

/// Posts in range together with the author's name, resolved backend-side.
#[tracing::instrument(skip(conn))]
pub async fn authors_between(
    conn: &mut Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<PostAuthorRow>> {
    sqlx::query_as::<_, PostAuthorRow>(
        r#"
        SELECT p.author_id, u.name
          FROM "Posts" p
          LEFT JOIN "Users" u ON u.id = p.author_id
         WHERE p.created_at::date >= $1
           AND p.created_at::date <= $2
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(conn)
    .await
    .into_db_error()
}
