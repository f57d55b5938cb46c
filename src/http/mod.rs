use actix_web::{web, HttpServer};
use error_stack::{Result, ResultExt};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use crate::{config, App};

pub mod controllers;
pub mod error;
pub mod views;

pub use error::Error;

#[derive(Debug, Error)]
#[error("Failed to start the dashboard server")]
pub struct StartServerError;

pub async fn run(config: config::Server) -> Result<(), StartServerError> {
    let address = (config.ip, config.port);
    let workers = config.workers;

    let app = App::new(config).await.change_context(StartServerError)?;

    tracing::info!(ip = %address.0, port = address.1, "Starting dashboard server");

    HttpServer::new(move || {
        actix_web::App::new()
            .app_data(web::Data::new(app.clone()))
            .wrap(TracingLogger::default())
            .configure(controllers::configure)
    })
    .workers(workers)
    .bind(address)
    .change_context(StartServerError)
    .attach_printable("could not bind to the configured address")?
    .run()
    .await
    .change_context(StartServerError)
}
