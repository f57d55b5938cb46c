use sqlx::FromRow;

use crate::database::{Connection, ErrorExt, Result};

/// One role-assignment row joined with the community's name.
///
/// Same LEFT JOIN contract as [`super::PostAuthorRow`]: a dangling
/// `community_id` becomes a `NULL` name.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct RoleCommunityRow {
    pub name: Option<String>,
}

/// Full-table scan of the role assignments, unfiltered by date. One row
/// per assignment, so a user holding two roles shows up twice.
#[tracing::instrument(skip(conn))]
pub async fn community_names(conn: &mut Connection) -> Result<Vec<RoleCommunityRow>> {
    sqlx::query_as::<_, RoleCommunityRow>(
        r#"
        SELECT c.name
          FROM "UsersCommunitiesRoles" r
          LEFT JOIN "Communities" c ON c.id = r.community_id
        "#,
    )
    .fetch_all(conn)
    .await
    .into_db_error()
}
