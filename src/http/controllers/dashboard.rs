use actix_web::{web, HttpResponse};
use askama::Template;
use chrono::{NaiveDate, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::http::views::{DashboardTemplate, GateTemplate};
use crate::http::Error;
use crate::reports::{self, DateRange, Page, StatusSnapshot};
use crate::App;

/// Filter form state. Every interaction resubmits the whole thing,
/// password included, and the page is rebuilt from scratch. There is
/// no session and nothing cached between requests.
#[derive(Debug, Deserialize)]
pub struct DashboardForm {
    pub password: SecretString,
    #[serde(default, deserialize_with = "cleared_date_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "cleared_date_as_none")]
    pub end_date: Option<NaiveDate>,
    pub page: Option<usize>,
}

/// A cleared date picker submits `start_date=` rather than omitting the
/// field. Treat the empty string as absent so the defaults kick in
/// instead of a 400.
fn cleared_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// The password prompt. Dates ride along as hidden fields so the
/// first render after logging in uses the default period.
#[tracing::instrument(skip_all)]
pub async fn get() -> Result<HttpResponse, Error> {
    let html = GateTemplate {
        warning: false,
        range: DateRange::default(),
    }
    .render()?;

    Ok(page_response(html))
}

#[tracing::instrument(skip_all)]
pub async fn post(
    app: web::Data<App>,
    form: web::Form<DashboardForm>,
) -> Result<HttpResponse, Error> {
    let form = form.into_inner();
    let defaults = DateRange::default();
    let range = DateRange {
        start: form.start_date.unwrap_or(defaults.start),
        end: form.end_date.unwrap_or(defaults.end),
    };

    // Request-scoped gate: the comparison result lives and dies with
    // this request. A wrong secret renders the warning and stops.
    let secret = app.config.dashboard_secret.expose_secret();
    if form.password.expose_secret() != secret {
        let html = GateTemplate {
            warning: true,
            range,
        }
        .render()?;
        return Ok(page_response(html));
    }

    let mut conn = app.db_read().await?;
    let today = Utc::now().date_naive();

    let snapshot = StatusSnapshot::fetch(&mut conn, today).await?;
    let users_per_day = reports::users_per_day(&mut conn, range).await?;
    let posts_per_day = reports::posts_per_day(&mut conn, range).await?;
    let posts_per_author = reports::posts_per_author(&mut conn, range).await?;
    let users_per_community = reports::users_per_community(&mut conn).await?;

    let page = Page::clamped(form.page.unwrap_or(1), posts_per_author.len());

    let html = DashboardTemplate {
        password: form.password.expose_secret(),
        range,
        snapshot: &snapshot,
        users_per_day: &users_per_day,
        posts_per_day: &posts_per_day,
        posts_per_author: &posts_per_author,
        users_per_community: &users_per_community,
        page_rows: page.slice(&posts_per_author),
        page,
    }
    .render()?;

    Ok(page_response(html))
}

fn page_response(html: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_date_inputs_fall_back_to_defaults() {
        let form: DashboardForm =
            serde_urlencoded::from_str("password=x&start_date=&end_date=&page=2").unwrap();
        assert_eq!(form.start_date, None);
        assert_eq!(form.end_date, None);
        assert_eq!(form.page, Some(2));
    }

    #[test]
    fn missing_date_fields_are_none() {
        let form: DashboardForm = serde_urlencoded::from_str("password=x").unwrap();
        assert_eq!(form.start_date, None);
        assert_eq!(form.end_date, None);
        assert_eq!(form.page, None);
    }

    #[test]
    fn filled_dates_parse() {
        let form: DashboardForm =
            serde_urlencoded::from_str("password=x&start_date=2025-05-01&end_date=2025-06-01")
                .unwrap();
        assert_eq!(form.start_date, NaiveDate::from_ymd_opt(2025, 5, 1));
        assert_eq!(form.end_date, NaiveDate::from_ymd_opt(2025, 6, 1));
    }

    #[test]
    fn garbage_dates_still_fail() {
        assert!(serde_urlencoded::from_str::<DashboardForm>("password=x&start_date=ontem").is_err());
    }
}
