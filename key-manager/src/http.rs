//! HTTP surface: `GET /public-key`, `GET /key-shares`, `GET /pairing-param`
//! (spec.md §6). All three are read-only and never touch shared mutable
//! state — `KeyManagerState` is built once in `init` and handed to every
//! worker as an `Arc`.

use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use service_common::dto::{KeyShareEntry, PairingParamResponse, PublicKeyResponse};

use crate::service::KeyManagerState;

#[get("/public-key")]
async fn public_key(state: web::Data<Arc<KeyManagerState>>) -> impl Responder {
    let (x, y) = state.keypair.public_key_xy();
    HttpResponse::Ok().json(PublicKeyResponse { x, y })
}

#[get("/key-shares")]
async fn key_shares(state: web::Data<Arc<KeyManagerState>>) -> impl Responder {
    let entries: Vec<KeyShareEntry> = state
        .shares
        .iter()
        .map(|s| KeyShareEntry {
            id: s.id as u32,
            share: s.to_base64(),
        })
        .collect();
    HttpResponse::Ok().json(entries)
}

#[get("/pairing-param")]
async fn pairing_param(state: web::Data<Arc<KeyManagerState>>) -> impl Responder {
    HttpResponse::Ok().json(PairingParamResponse {
        params: state.encoded_params.clone(),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public_key)
        .service(key_shares)
        .service(pairing_param)
        .service(service_common::health::healthz);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn test_state() -> Arc<KeyManagerState> {
        let cfg = crate::config::Config {
            http_public_address: "0.0.0.0:9001".into(),
            security_level: "medium".into(),
            threshold_enabled: true,
            threshold: 4,
            total_shares: 5,
            logger_handler_type: "json".into(),
            logger_log_level: "debug".into(),
        };
        Arc::new(KeyManagerState::init(&cfg).unwrap())
    }

    #[actix_rt::test]
    async fn public_key_returns_two_decimal_strings() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/public-key").to_request();
        let resp: PublicKeyResponse = test::call_and_read_body_json(&app, req).await;
        assert!(!resp.x.is_empty());
        assert!(!resp.y.is_empty());
    }

    #[actix_rt::test]
    async fn key_shares_returns_five_entries_with_sequential_ids() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/key-shares").to_request();
        let resp: Vec<KeyShareEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.len(), 5);
        for (i, entry) in resp.iter().enumerate() {
            assert_eq!(entry.id as usize, i + 1);
        }
    }

    #[actix_rt::test]
    async fn healthz_is_ok() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/healthz").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
