use error_stack::Report;
use thiserror::Error;

/// Database related errors
#[derive(Debug, Error)]
pub enum Error {
    /// An error caused by an invalid Postgres connection url.
    #[error("invalid connection url")]
    InvalidUrl,
    /// An error caused by an [`sqlx`] error.
    #[error("received a pool error: {0}")]
    Internal(sqlx::Error),
    /// The pool has no reliable connection to transact with
    /// the backend.
    #[error("unhealthy database pool")]
    UnhealthyPool,
}

/// Lazily typed [`std::result::Result`] but the error generic
/// is filled up with [a database error](Error).
pub type Result<T> = error_stack::Result<T, Error>;

/// Converts from a generic [sqlx] result into a [database compatible error](Error).
pub trait ErrorExt<T> {
    fn into_db_error(self) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn into_db_error(self) -> Result<T> {
        self.map_err(|e| Report::new(Error::Internal(e)))
    }
}

/// Checks on `error_stack::Report<Error>` without downcasting at
/// every call site.
pub trait ErrorExt2 {
    fn is_unhealthy(&self) -> bool;
}

impl ErrorExt2 for error_stack::Report<Error> {
    fn is_unhealthy(&self) -> bool {
        self.downcast_ref::<Error>()
            .map(|v| matches!(v, Error::UnhealthyPool))
            .unwrap_or_default()
    }
}
