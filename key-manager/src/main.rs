mod config;
mod http;
mod service;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use config::Config;
use service::KeyManagerState;
use service_common::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::load();
    init_logging(config.log_format(), &config.logger_log_level);

    tracing::info!("starting key-manager");

    let state = match KeyManagerState::init(&config) {
        Ok(state) => {
            tracing::info!(
                shares = state.shares.len(),
                "key manager initialized successfully"
            );
            Arc::new(state)
        }
        Err(err) => {
            tracing::error!(error = %err, "key manager initialization failed");
            std::process::exit(1);
        }
    };

    let address = config.http_public_address.clone();
    tracing::info!(address = %address, "serving key-manager HTTP interface");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(http::configure)
    })
    .bind(&address)?
    .run()
    .await
}
