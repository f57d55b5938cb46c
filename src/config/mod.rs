use thiserror::Error;

mod database;
mod server;

pub use database::Database;
pub use server::Server;

#[derive(Debug, Error)]
#[error("Failed to load dashboard configuration")]
pub struct ParseError;
