use std::collections::HashMap;

use crate::database::{Connection, Result};
use crate::schema::{self, RoleCommunityRow};

/// One row of the users-per-community table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityUserCount {
    pub name: Option<String>,
    /// Role assignments, not distinct users. A user holding two roles in
    /// the same community counts twice.
    pub total_users: i64,
}

/// Role assignments per community over the whole table, biggest first.
#[tracing::instrument(skip(conn))]
pub async fn users_per_community(conn: &mut Connection) -> Result<Vec<CommunityUserCount>> {
    let rows = schema::roles::community_names(conn).await?;
    Ok(count_per_community(rows))
}

fn count_per_community(rows: Vec<RoleCommunityRow>) -> Vec<CommunityUserCount> {
    let mut buckets: HashMap<Option<String>, i64> = HashMap::new();
    for row in rows {
        *buckets.entry(row.name).or_insert(0) += 1;
    }

    let mut table: Vec<CommunityUserCount> = buckets
        .into_iter()
        .map(|(name, total_users)| CommunityUserCount { name, total_users })
        .collect();

    // Ties broken by name so the output is stable across runs
    table.sort_by(|a, b| b.total_users.cmp(&a.total_users).then(a.name.cmp(&b.name)));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: Option<&str>) -> RoleCommunityRow {
        RoleCommunityRow {
            name: name.map(str::to_owned),
        }
    }

    #[test]
    fn counts_assignments_not_distinct_users() {
        // Two roles in the same community for one user: two rows, two counts.
        let rows = vec![
            row(Some("rustacea")),
            row(Some("rustacea")),
            row(Some("jardim")),
        ];

        let table = count_per_community(rows);
        assert_eq!(
            table,
            vec![
                CommunityUserCount {
                    name: Some("rustacea".into()),
                    total_users: 2
                },
                CommunityUserCount {
                    name: Some("jardim".into()),
                    total_users: 1
                },
            ]
        );
    }

    #[test]
    fn unresolved_community_keeps_null_name() {
        let table = count_per_community(vec![row(None)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].name, None);
        assert_eq!(table[0].total_users, 1);
    }

    #[test]
    fn empty_input_yields_typed_empty_table() {
        assert_eq!(
            count_per_community(Vec::new()),
            Vec::<CommunityUserCount>::new()
        );
    }
}
