//! Pairing group elements. See spec.md §3 "G1 / G2 elements".
//!
//! The Type-A pairing spec.md describes is *symmetric*: G1 and G2 are the
//! same group. This module backs both roles with BLS12-381's G1 group (see
//! DESIGN.md for the full rationale), so `G1` and `G2` below are the same
//! type under two names — `G2` is the name used where the spec talks about
//! the generator/public-key role, `G1` where it talks about ciphertexts and
//! partial decryptions.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use blstrs::{G1Affine, G1Projective};
use group::{Curve, Group};
use num_bigint::BigUint;
use rand_core::RngCore;

use crate::error::{CoreError, Result};
use crate::scalar::Zr;

/// A point in the (shared) pairing group. `Copy` because the underlying
/// `blstrs` projective point is a plain value type — no interior mutability,
/// no locking needed to share one across threads (see DESIGN.md's resolution
/// of spec.md §5's "pairing instance thread-safety" open question).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupElement(G1Projective);

/// Alias used where the spec speaks of the G1 role (ciphertexts, partials).
pub type G1 = GroupElement;
/// Alias used where the spec speaks of the G2 role (generator, public key).
pub type G2 = GroupElement;

impl GroupElement {
    pub fn identity() -> Self {
        GroupElement(G1Projective::identity())
    }

    pub fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    /// Draws a uniform random group element.
    pub fn random(rng: &mut impl RngCore) -> Self {
        GroupElement(G1Projective::random(rng))
    }

    /// Group exponentiation: `self^scalar`. This is the sole operation
    /// `partial_decrypt` performs (spec.md §4.2 step 5) and the sole
    /// operation computing `public_key = g2^private_key` (spec.md §4.1
    /// step 7).
    pub fn pow(&self, scalar: &Zr) -> Self {
        GroupElement(self.0 * scalar.inner())
    }

    /// Canonical uncompressed point encoding, the representation spec.md §8
    /// S2 requires for the wire ("at least 64 bytes" — Type-A G1 at medium
    /// level is the ≥128-byte uncompressed form this mirrors at BLS12-381's
    /// smaller point size). Compressed encoding is NOT used here: at 48
    /// bytes it would fall under the spec's minimum.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_affine().to_uncompressed().to_vec()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decodes a canonical uncompressed point. An all-zero or otherwise
    /// malformed encoding surfaces as `CoreError::ParamsDecode`; callers that
    /// need the spec's "zero element" distinction should check
    /// `is_identity()` after a successful decode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const UNCOMPRESSED_LEN: usize = 96;
        if bytes.len() != UNCOMPRESSED_LEN {
            return Err(CoreError::ParamsDecode(format!(
                "expected a {UNCOMPRESSED_LEN}-byte uncompressed point, got {}",
                bytes.len()
            )));
        }
        let mut repr = [0u8; UNCOMPRESSED_LEN];
        repr.copy_from_slice(bytes);
        let affine = Option::<G1Affine>::from(G1Affine::from_uncompressed(&repr))
            .ok_or_else(|| CoreError::ParamsDecode("point is not on the curve".into()))?;
        Ok(GroupElement(G1Projective::from(affine)))
    }

    pub fn from_base64(encoded: &str) -> Result<Self> {
        if encoded.is_empty() {
            return Err(CoreError::EmptyPayload("ciphertext"));
        }
        let bytes = STANDARD.decode(encoded)?;
        Self::from_bytes(&bytes)
    }

    /// The `{x, y}` decimal-string affine coordinates used by the public-key
    /// wire contract (spec.md §6). Derived from the uncompressed point
    /// encoding: 96 bytes, big-endian `x` then `y`, with the top three
    /// metadata bits of the first byte masked off per the standard
    /// zkcrypto/blst serialization format.
    pub fn affine_xy_decimal(&self) -> (String, String) {
        let uncompressed = self.0.to_affine().to_uncompressed();
        let bytes = &uncompressed[..];
        let half = bytes.len() / 2;
        let mut x_bytes = bytes[..half].to_vec();
        x_bytes[0] &= 0x1f;
        let y_bytes = &bytes[half..];
        let x = BigUint::from_bytes_be(&x_bytes);
        let y = BigUint::from_bytes_be(y_bytes);
        (x.to_string(), y.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn random_is_not_identity() {
        let mut rng = OsRng;
        let g = GroupElement::random(&mut rng);
        assert!(!g.is_identity());
    }

    #[test]
    fn base64_round_trip_is_stable() {
        let mut rng = OsRng;
        let g = GroupElement::random(&mut rng);
        let encoded = g.to_base64();
        let decoded = GroupElement::from_base64(&encoded).unwrap();
        assert_eq!(g, decoded);
        assert_eq!(encoded, decoded.to_base64());
    }

    #[test]
    fn pow_by_zero_scalar_yields_identity() {
        let mut rng = OsRng;
        let g = GroupElement::random(&mut rng);
        let zero = Zr::zero();
        assert!(g.pow(&zero).is_identity());
    }

    #[test]
    fn affine_coordinates_are_non_empty_decimals() {
        let mut rng = OsRng;
        let g = GroupElement::random(&mut rng);
        let (x, y) = g.affine_xy_decimal();
        assert!(!x.is_empty());
        assert!(!y.is_empty());
        assert!(x.chars().all(|c| c.is_ascii_digit()));
        assert!(y.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn rejects_malformed_bytes() {
        assert!(GroupElement::from_bytes(&[0u8; 3]).is_err());
    }
}
