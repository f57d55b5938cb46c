use chrono::NaiveDate;

use crate::database::{Connection, Result};
use crate::schema;

/// How many registered users the platform is aiming for.
const USER_GOAL: i64 = 1000;

/// Point-in-time counters shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// `1000 - total_users`. Goes negative once the goal is passed;
    /// the dashboard shows it as-is.
    pub users_to_goal: i64,
    pub total_users: i64,
    pub users_today: i64,
    pub total_communities: i64,
    pub communities_today: i64,
    pub total_posts: i64,
    pub posts_today: i64,
}

impl StatusSnapshot {
    /// Issues the six count queries against the backend. `today` is an
    /// argument rather than a clock read so the "today" buckets are
    /// decided by the caller. Any failing query aborts the whole fetch.
    #[tracing::instrument(skip(conn))]
    pub async fn fetch(conn: &mut Connection, today: NaiveDate) -> Result<Self> {
        let total_users = schema::users::count(conn).await?;
        let users_today = schema::users::count_created_on(conn, today).await?;
        let total_communities = schema::communities::count(conn).await?;
        let communities_today = schema::communities::count_created_on(conn, today).await?;
        let total_posts = schema::posts::count(conn).await?;
        let posts_today = schema::posts::count_created_on(conn, today).await?;

        Ok(Self {
            users_to_goal: users_to_goal(total_users),
            total_users,
            users_today,
            total_communities,
            communities_today,
            total_posts,
            posts_today,
        })
    }
}

fn users_to_goal(total_users: i64) -> i64 {
    USER_GOAL - total_users
}

#[cfg(test)]
mod tests {
    use super::users_to_goal;

    #[test]
    fn gap_to_goal() {
        assert_eq!(users_to_goal(847), 153);
        assert_eq!(users_to_goal(0), 1000);
    }

    #[test]
    fn gap_is_not_clamped_past_the_goal() {
        assert_eq!(users_to_goal(1200), -200);
    }
}
