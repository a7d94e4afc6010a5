//! HTTP surface: `GET /ciphertext`, `POST /partial-decrypt` (spec.md §6).

use actix_web::{get, post, web, HttpResponse, Responder};
use service_common::dto::{CiphertextResponse, PartialDecryptRequest, PartialDecryptResponse};
use service_common::AppError;

use crate::service::PartialDecryptorState;

#[get("/ciphertext")]
async fn ciphertext(state: web::Data<PartialDecryptorState>) -> impl Responder {
    HttpResponse::Ok().json(CiphertextResponse {
        ciphertext: state.generate_ciphertext(),
    })
}

#[post("/partial-decrypt")]
async fn partial_decrypt(
    state: web::Data<PartialDecryptorState>,
    body: web::Json<PartialDecryptRequest>,
) -> Result<impl Responder, AppError> {
    let partial = state.partial_decrypt(&body.ciphertext, &body.share)?;
    Ok(HttpResponse::Ok().json(PartialDecryptResponse {
        partial_decryption: partial,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(ciphertext)
        .service(partial_decrypt)
        .service(service_common::health::healthz);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use pairing_core::{Pairing, PairingParams, SecurityLevel};

    fn test_state() -> PartialDecryptorState {
        let params = PairingParams::generate(SecurityLevel::Medium).unwrap();
        PartialDecryptorState {
            pairing: Pairing::from_params(params).unwrap(),
        }
    }

    #[actix_rt::test]
    async fn ciphertext_endpoint_returns_at_least_64_bytes_base64() {
        // spec.md §8 S2: base64 of at least 64 raw bytes.
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/ciphertext").to_request();
        let resp: CiphertextResponse = test::call_and_read_body_json(&app, req).await;
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        let decoded = STANDARD.decode(&resp.ciphertext).unwrap();
        assert!(decoded.len() >= 64);
    }

    #[actix_rt::test]
    async fn partial_decrypt_rejects_empty_ciphertext_with_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/partial-decrypt")
            .set_json(PartialDecryptRequest {
                ciphertext: "".into(),
                share: "AA==".into(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_rt::test]
    async fn partial_decrypt_rejects_zero_share_with_422() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;
        let ct_req = test::TestRequest::get().uri("/ciphertext").to_request();
        let ct: CiphertextResponse = test::call_and_read_body_json(&app, ct_req).await;

        let req = test::TestRequest::post()
            .uri("/partial-decrypt")
            .set_json(PartialDecryptRequest {
                ciphertext: ct.ciphertext,
                share: "AA==".into(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);
    }
}
