mod config;
mod http;
mod service;

use actix_web::{web, App, HttpServer};
use config::Config;
use service::PartialDecryptorState;
use service_common::{init_logging, ServiceClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::load();
    init_logging(config.log_format(), &config.logger_log_level);

    tracing::info!("starting partial-decryptor");

    let km_client = ServiceClient::new(config.kms_http_address.clone());
    let state = match PartialDecryptorState::init(&km_client).await {
        Ok(state) => {
            tracing::info!("partial decryptor initialized successfully");
            state
        }
        Err(err) => {
            tracing::error!(error = %err, "partial decryptor initialization failed");
            std::process::exit(1);
        }
    };

    let address = config.http_public_address.clone();
    tracing::info!(address = %address, "serving partial-decryptor HTTP interface");

    HttpServer::new(move || {
        // `Pairing`/`Keypair` hold only Copy/value data, so sharing the same
        // state across actix-web's worker threads needs no mutex.
        App::new()
            .app_data(web::Data::new(PartialDecryptorState {
                pairing: state.pairing.clone(),
            }))
            .configure(http::configure)
    })
    .bind(&address)?
    .run()
    .await
}
