use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::database;

/// Terminal failure of one render cycle.
///
/// Whatever the backend throws at us aborts the whole page; there is
/// no partial rendering and no retry.
#[derive(Debug)]
pub enum Error {
    Database(error_stack::Report<database::Error>),
    Template(askama::Error),
}

impl From<error_stack::Report<database::Error>> for Error {
    fn from(report: error_stack::Report<database::Error>) -> Self {
        Self::Database(report)
    }
}

impl From<askama::Error> for Error {
    fn from(error: askama::Error) -> Self {
        Self::Template(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database(report) => report.fmt(f),
            Self::Template(error) => error.fmt(f),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!(error = ?self, "Dashboard render cycle failed");
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body("Erro ao consultar o backend.")
    }
}
