//! The scalar ring `Zr`: elements of the integers modulo the pairing's
//! prime subgroup order. See spec.md §3 "Scalar (`Zr`)".

use base64::{engine::general_purpose::STANDARD, Engine as _};
use blstrs::Scalar;
use ff::{Field, PrimeField};
use rand_core::RngCore;

use crate::error::{CoreError, Result};

/// A scalar in `Zr`, backed by `blstrs::Scalar` (BLS12-381's scalar field).
///
/// `blstrs::Scalar` is itself `Copy`; this wrapper exists so callers work
/// with spec-shaped operations (`set_big`, base64 codec, zero test) rather
/// than the raw field type directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zr(Scalar);

impl Zr {
    pub fn zero() -> Self {
        Zr(Scalar::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        bool::from(ff::Field::is_zero(&self.0))
    }

    /// Draws a uniform element of `Zr` using the given RNG.
    pub fn random(rng: &mut impl RngCore) -> Self {
        Zr(Scalar::random(rng))
    }

    pub fn inner(&self) -> Scalar {
        self.0
    }

    /// Interprets `bytes` as a non-negative big-endian integer and reduces it
    /// modulo the subgroup order, mirroring the original's `Zr.SetBig`. This
    /// accepts byte strings of arbitrary length and is NOT the same as
    /// `PrimeField::from_repr`, which only accepts a canonical fixed-width
    /// encoding and rejects values at or above the modulus.
    pub fn set_big_endian(bytes: &[u8]) -> Self {
        let mut acc = Scalar::ZERO;
        let base = Scalar::from(256u64);
        for &b in bytes {
            acc = acc * base + Scalar::from(b as u64);
        }
        Zr(acc)
    }

    /// Big-endian big-integer bytes of the scalar's canonical representative,
    /// with leading zero bytes stripped (matching a big-integer's minimal
    /// encoding) but at least one byte long.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let repr = self.0.to_repr();
        let mut be: Vec<u8> = repr.as_ref().iter().rev().copied().collect();
        while be.len() > 1 && be[0] == 0 {
            be.remove(0);
        }
        be
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes_be())
    }

    pub fn from_base64(encoded: &str) -> Result<Self> {
        if encoded.is_empty() {
            return Err(CoreError::EmptyPayload("share"));
        }
        let bytes = STANDARD.decode(encoded)?;
        Ok(Self::set_big_endian(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn zero_bytes_decode_to_zero_scalar() {
        // base64("\x00") == "AA=="
        let zr = Zr::from_base64("AA==").unwrap();
        assert!(zr.is_zero());
    }

    #[test]
    fn random_is_almost_never_zero() {
        let mut rng = OsRng;
        let zr = Zr::random(&mut rng);
        assert!(!zr.is_zero());
    }

    #[test]
    fn base64_round_trip_is_stable() {
        let mut rng = OsRng;
        let zr = Zr::random(&mut rng);
        let encoded = zr.to_base64();
        let decoded = Zr::from_base64(&encoded).unwrap();
        assert_eq!(encoded, decoded.to_base64());
    }

    #[test]
    fn set_big_endian_matches_small_integer() {
        // 0x01 0x02 -> 258
        let zr = Zr::set_big_endian(&[0x01, 0x02]);
        assert_eq!(zr.inner(), Scalar::from(258u64));
    }
}
