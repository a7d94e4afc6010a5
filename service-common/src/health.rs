//! Ambient `GET /healthz` route shared by all three binaries (SPEC_FULL.md
//! §6). Deliberately trivial: no metrics, no dependency checks, just "the
//! process is up and its startup sequence completed".

use actix_web::{get, HttpResponse, Responder};

use crate::dto::HealthResponse;

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::default())
}
