use chrono::NaiveDate;

use crate::database::{Connection, ErrorExt, Result};

#[tracing::instrument(skip(conn))]
pub async fn count(conn: &mut Connection) -> Result<i64> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Communities""#)
        .fetch_one(conn)
        .await
        .into_db_error()
}

#[tracing::instrument(skip(conn))]
pub async fn count_created_on(conn: &mut Connection, day: NaiveDate) -> Result<i64> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Communities" WHERE created_at::date = $1"#)
        .bind(day)
        .fetch_one(conn)
        .await
        .into_db_error()
}
