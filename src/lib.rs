pub mod app;
pub mod config;
pub mod database;
pub mod http;
pub mod reports;
pub mod schema;
pub mod util;

pub use app::App;
