mod config;
mod http;
mod service;

use actix_web::{web, App, HttpServer};
use config::Config;
use service::GatewayState;
use service_common::{init_logging, ServiceClient};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::load();
    init_logging(config.log_format(), &config.logger_log_level);

    tracing::info!("starting gateway");

    let km_client = ServiceClient::new(config.kms_http_address.clone());
    let ds_client = ServiceClient::new(config.ds_http_address.clone());

    let state = match GatewayState::init(km_client, ds_client).await {
        Ok(state) => {
            tracing::info!(
                shares = state.key_shares.len(),
                "gateway initialized successfully"
            );
            Arc::new(state)
        }
        Err(err) => {
            tracing::error!(error = %err, "gateway initialization failed");
            std::process::exit(1);
        }
    };

    let address = config.http_public_address.clone();
    tracing::info!(address = %address, "serving gateway HTTP interface");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(state.clone()))
            .configure(http::configure)
    })
    .bind(&address)?
    .run()
    .await
}
