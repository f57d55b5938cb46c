//! Askama views rendered by the dashboard controllers.

use askama::Template;

use crate::reports::{
    AuthorPostCount, CommunityUserCount, DailyCount, DateRange, Page, StatusSnapshot,
};

/// Password prompt, doubling as the access-restricted warning page.
#[derive(Template)]
#[template(path = "gate.html")]
pub struct GateTemplate {
    pub warning: bool,
    pub range: DateRange,
}

/// The whole dashboard: snapshot, the four aggregate tables in fixed
/// order, then the paginated posts-per-author view.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub password: &'a str,
    pub range: DateRange,
    pub snapshot: &'a StatusSnapshot,
    pub users_per_day: &'a [DailyCount],
    pub posts_per_day: &'a [DailyCount],
    pub posts_per_author: &'a [AuthorPostCount],
    pub users_per_community: &'a [CommunityUserCount],
    pub page_rows: &'a [AuthorPostCount],
    pub page: Page,
}
