use std::collections::HashMap;
use std::future::Future;

use crate::database::{Connection, Result};
use crate::schema::{self, PostAuthorRow};

use super::DateRange;

/// One row of the posts-per-author table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorPostCount {
    pub author_id: i64,
    /// `None` when the author row cannot be resolved anymore.
    pub name: Option<String>,
    pub total_posts: i64,
}

/// Posts per author within the range, most prolific first.
#[tracing::instrument(skip(conn))]
pub async fn posts_per_author(
    conn: &mut Connection,
    range: DateRange,
) -> Result<Vec<AuthorPostCount>> {
    per_author_report(
        range,
        schema::posts::authors_between(conn, range.start, range.end),
    )
    .await
}

/// A reversed range short-circuits to an empty table before the fetch
/// future is ever polled.
async fn per_author_report<Fut>(range: DateRange, fetch: Fut) -> Result<Vec<AuthorPostCount>>
where
    Fut: Future<Output = Result<Vec<PostAuthorRow>>>,
{
    if range.is_reversed() {
        return Ok(Vec::new());
    }

    Ok(count_per_author(fetch.await?))
}

/// Groups by the full `(author_id, name)` pair, exactly as the backend
/// join hands the rows over. Should an id ever carry two different
/// names, each pair is counted separately; nothing here enforces the
/// foreign-key integrity the backend is supposed to provide.
fn count_per_author(rows: Vec<PostAuthorRow>) -> Vec<AuthorPostCount> {
    let mut buckets: HashMap<(i64, Option<String>), i64> = HashMap::new();
    for row in rows {
        *buckets.entry((row.author_id, row.name)).or_insert(0) += 1;
    }

    let mut table: Vec<AuthorPostCount> = buckets
        .into_iter()
        .map(|((author_id, name), total_posts)| AuthorPostCount {
            author_id,
            name,
            total_posts,
        })
        .collect();

    // Ties broken by author id, then name, so the output is stable
    // across runs even for an id carrying two names
    table.sort_by(|a, b| {
        b.total_posts
            .cmp(&a.total_posts)
            .then(a.author_id.cmp(&b.author_id))
            .then(a.name.cmp(&b.name))
    });
    table
}
