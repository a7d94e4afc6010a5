//! Keypair generation. See spec.md §3 "Keypair" and §4.1 startup steps 5-7.

use rand_core::RngCore;

use crate::error::{CoreError, Result};
use crate::group::G2;
use crate::scalar::Zr;

/// `private_key: Zr`, `public_key: G2 = g2^private_key`, plus the generator
/// that was drawn to compute it — KM needs to hand `public_key` out as
/// `{x, y}` decimal coordinates (spec.md §4.1's `get_public_key`), which is
/// a pure function of `public_key` alone, but keeping the generator around
/// documents the relation and is cheap (it's `Copy`).
#[derive(Clone, Copy, Debug)]
pub struct Keypair {
    pub private_key: Zr,
    pub generator: G2,
    pub public_key: G2,
}

impl Keypair {
    /// Draws `private_key ← Zr \ {0}`, `g2 ← G2 \ {0}`, computes
    /// `public_key = g2^private_key`, fail-fast on any zero result — the
    /// exact sequence of spec.md §4.1 steps 5-7.
    pub fn generate(rng: &mut impl RngCore) -> Result<Self> {
        let private_key = Zr::random(rng);
        if private_key.is_zero() {
            return Err(CoreError::ZeroPrivateKey);
        }

        let generator = G2::random(rng);
        if generator.is_identity() {
            return Err(CoreError::ZeroGenerator);
        }

        let public_key = generator.pow(&private_key);
        if public_key.is_identity() {
            return Err(CoreError::ZeroPublicKey);
        }

        Ok(Keypair {
            private_key,
            generator,
            public_key,
        })
    }

    /// `{x, y}` decimal-string coordinates of the public key, the exact
    /// shape `GET /public-key` returns (spec.md §6).
    pub fn public_key_xy(&self) -> (String, String) {
        self.public_key.affine_xy_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn generated_public_key_is_never_identity() {
        let mut rng = OsRng;
        for _ in 0..16 {
            let kp = Keypair::generate(&mut rng).unwrap();
            assert!(!kp.public_key.is_identity());
        }
    }

    #[test]
    fn public_key_reproduces_deterministically_from_same_inputs() {
        let mut rng = OsRng;
        let kp = Keypair::generate(&mut rng).unwrap();
        let recomputed = kp.generator.pow(&kp.private_key);
        assert_eq!(kp.public_key, recomputed);
    }
}
