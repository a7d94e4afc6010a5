//! Partial Decryptor core operations. See spec.md §4.2.

use pairing_core::{CoreError, GroupElement, PairingParams, Pairing, Zr};
use service_common::dto::PairingParamResponse;
use service_common::{AppError, ServiceClient};

/// Holds the pairing instance cached at startup (spec.md §4.2 step 3). No
/// interior mutability: `Pairing` wraps only `Copy`/immutable data, so
/// sharing one instance across worker threads needs no mutex (DESIGN.md's
/// resolution of spec.md §5's thread-safety open question).
pub struct PartialDecryptorState {
    pub pairing: Pairing,
}

impl PartialDecryptorState {
    /// Steps 1-3 of spec.md §4.2's startup procedure: fetch params from KM
    /// (single attempt, fail-fast), decode and instantiate, cache.
    pub async fn init(km_client: &ServiceClient) -> Result<Self, AppError> {
        let response: PairingParamResponse = km_client.get_json("/pairing-param").await?;
        let params = PairingParams::from_base64(&response.params).map_err(AppError::from)?;
        let pairing = Pairing::from_params(params).map_err(AppError::from)?;
        Ok(PartialDecryptorState { pairing })
    }

    /// Draws a uniform random G1 element and returns its base64 encoding.
    /// No input to validate (spec.md §4.2, `generate_ciphertext`).
    pub fn generate_ciphertext(&self) -> String {
        let mut rng = rand::rngs::OsRng;
        let element = GroupElement::random(&mut rng);
        element.to_base64()
    }

    /// `partial_decrypt(ciphertext, share) -> base64`, spec.md §4.2 steps 1-5.
    pub fn partial_decrypt(&self, ciphertext: &str, share: &str) -> Result<String, AppError> {
        if ciphertext.is_empty() {
            return Err(AppError::validation("ciphertext", "payload must not be empty"));
        }
        if share.is_empty() {
            return Err(AppError::validation("share", "payload must not be empty"));
        }

        let share_scalar = decode_share(share)?;
        let ciphertext_point = decode_ciphertext(ciphertext)?;

        let partial = ciphertext_point.pow(&share_scalar);
        Ok(partial.to_base64())
    }
}

fn decode_share(share: &str) -> Result<Zr, AppError> {
    let bytes = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, share)
        .map_err(|e| AppError::validation("share", format!("invalid base64: {e}")))?;
    let scalar = Zr::set_big_endian(&bytes);
    if scalar.is_zero() {
        return Err(CoreError::ZeroShareElement.into());
    }
    Ok(scalar)
}

fn decode_ciphertext(ciphertext: &str) -> Result<GroupElement, AppError> {
    let bytes = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, ciphertext)
        .map_err(|e| AppError::validation("ciphertext", format!("invalid base64: {e}")))?;
    let point = GroupElement::from_bytes(&bytes).map_err(AppError::from)?;
    if point.is_identity() {
        return Err(CoreError::ZeroCiphertextElement.into());
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use pairing_core::SecurityLevel;

    fn pairing() -> Pairing {
        let params = PairingParams::generate(SecurityLevel::Medium).unwrap();
        Pairing::from_params(params).unwrap()
    }

    #[test]
    fn ciphertext_is_non_empty_base64() {
        let state = PartialDecryptorState { pairing: pairing() };
        let ciphertext = state.generate_ciphertext();
        assert!(!ciphertext.is_empty());
        assert!(base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &ciphertext).is_ok());
    }

    #[test]
    fn rejects_empty_ciphertext() {
        let state = PartialDecryptorState { pairing: pairing() };
        let err = state.partial_decrypt("", "AA==").unwrap_err();
        matches!(err, AppError::ValidationError { .. });
    }

    #[test]
    fn rejects_zero_share() {
        let state = PartialDecryptorState { pairing: pairing() };
        let mut rng = rand::rngs::OsRng;
        let ciphertext = GroupElement::random(&mut rng).to_base64();
        let err = state.partial_decrypt(&ciphertext, "AA==").unwrap_err();
        assert_eq!(err.status_code(), actix_web::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn partial_decrypt_of_nonzero_inputs_is_non_empty() {
        let state = PartialDecryptorState { pairing: pairing() };
        let mut rng = rand::rngs::OsRng;
        let ciphertext = GroupElement::random(&mut rng).to_base64();
        let share = Zr::random(&mut rng).to_base64();
        let partial = state.partial_decrypt(&ciphertext, &share).unwrap();
        assert!(!partial.is_empty());
    }
}
