//! Wire DTOs shared by KM, PD and GW. Field names and shapes are
//! compatibility-sensitive (spec.md §6) and must not change.

use serde::{Deserialize, Serialize};

/// `GET /public-key` (KM) and `GET /kms/public-key` (GW).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicKeyResponse {
    pub x: String,
    pub y: String,
}

/// One entry of `GET /key-shares` (KM).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyShareEntry {
    pub id: u32,
    pub share: String,
}

/// `GET /pairing-param` (KM).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairingParamResponse {
    pub params: String,
}

/// `GET /ciphertext` (PD) and `GET /ds/ciphertext` (GW).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CiphertextResponse {
    pub ciphertext: String,
}

/// `POST /partial-decrypt` (PD) request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialDecryptRequest {
    pub ciphertext: String,
    pub share: String,
}

/// `POST /partial-decrypt` (PD) response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialDecryptResponse {
    pub partial_decryption: String,
}

/// `POST /ds/decrypt` (GW) request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecryptRequest {
    pub ciphertext: String,
}

/// `POST /ds/decrypt` (GW) response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecryptResponse {
    pub decrypted_message: String,
}

/// Ambient `GET /healthz` response carried by all three binaries
/// (SPEC_FULL.md §6's supplemented liveness surface).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        HealthResponse { status: "ok" }
    }
}
