//! HTTP surface: `GET /kms/public-key`, `GET /ds/ciphertext`,
//! `POST /ds/decrypt` (spec.md §6).

use actix_web::{get, post, web, HttpResponse, Responder};
use service_common::dto::DecryptRequest;
use service_common::AppError;

use crate::service::GatewayState;

#[get("/kms/public-key")]
async fn public_key(state: web::Data<GatewayState>) -> Result<impl Responder, AppError> {
    let resp = state.public_key().await?;
    Ok(HttpResponse::Ok().json(resp))
}

#[get("/ds/ciphertext")]
async fn ciphertext(state: web::Data<GatewayState>) -> Result<impl Responder, AppError> {
    let resp = state.ciphertext().await?;
    Ok(HttpResponse::Ok().json(resp))
}

#[post("/ds/decrypt")]
async fn decrypt(
    state: web::Data<GatewayState>,
    body: web::Json<DecryptRequest>,
) -> Result<impl Responder, AppError> {
    let decrypted_message = state.decrypt(&body.ciphertext).await?;
    Ok(HttpResponse::Ok().json(service_common::dto::DecryptResponse { decrypted_message }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public_key)
        .service(ciphertext)
        .service(decrypt)
        .service(service_common::health::healthz);
}
