//! GF(256) byte-wise Shamir's Secret Sharing. See spec.md §3 "Key share
//! (`KeyShare`)" and §4.3's `combine` step, and GLOSSARY's definition.
//!
//! Each byte of the secret is the constant term of an independent random
//! degree-`(t-1)` polynomial over GF(256); a share is one evaluation of
//! every one of those polynomials at a shared x-coordinate, with the
//! x-coordinate appended as the share's last byte — the same layout used by
//! hashicorp/vault's `shamir` package, which `original_source/` calls into
//! directly (`gateway-service/pkg/services/ds.go`).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand_core::RngCore;
use zeroize::Zeroizing;

use crate::error::{CoreError, Result};

/// GF(256) multiplication using the AES/Rijndael reduction polynomial
/// `x^8 + x^4 + x^3 + x + 1` (0x11B), the same field hashicorp/vault's
/// `shamir` package uses.
fn gf256_mul(mut a: u8, mut b: u8) -> u8 {
    let mut result: u8 = 0;
    for _ in 0..8 {
        if b & 1 != 0 {
            result ^= a;
        }
        let high_bit_set = a & 0x80 != 0;
        a <<= 1;
        if high_bit_set {
            a ^= 0x1B;
        }
        b >>= 1;
    }
    result
}

fn gf256_pow(mut base: u8, mut exp: u8) -> u8 {
    let mut result: u8 = 1;
    while exp > 0 {
        if exp & 1 != 0 {
            result = gf256_mul(result, base);
        }
        base = gf256_mul(base, base);
        exp >>= 1;
    }
    result
}

fn gf256_inv(a: u8) -> u8 {
    // a^254 == a^-1 in GF(256), by Fermat's little theorem (a^255 == 1 for a != 0).
    gf256_pow(a, 254)
}

fn gf256_div(a: u8, b: u8) -> u8 {
    gf256_mul(a, gf256_inv(b))
}

/// Evaluates the polynomial with the given coefficients (`coeffs[0]` is the
/// constant term) at `x`, in GF(256).
fn eval_polynomial(coeffs: &[u8], x: u8) -> u8 {
    let mut result = 0u8;
    for &coeff in coeffs.iter().rev() {
        result = gf256_mul(result, x) ^ coeff;
    }
    result
}

/// One shareholder's share of the secret. The x-coordinate is carried as the
/// last byte of `share_bytes`, matching the wire-visible byte layout in
/// spec.md §3 (the `KeyShare.share` base64 payload is exactly these bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyShare {
    pub id: u8,
    pub share_bytes: Vec<u8>,
}

impl KeyShare {
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.share_bytes)
    }

    pub fn from_base64(id: u8, encoded: &str) -> Result<Self> {
        if encoded.is_empty() {
            return Err(CoreError::EmptyPayload("share"));
        }
        let share_bytes = STANDARD.decode(encoded)?;
        Ok(KeyShare { id, share_bytes })
    }
}

/// Splits `secret` into `n` shares with threshold `t`. Preconditions
/// (`t <= n`, `t >= 1`, `n >= 1`) are the caller's responsibility to check
/// and surface as `InvalidConfig` (spec.md §4.1's validation preconditions);
/// this function only asserts them as an internal invariant.
pub fn split(secret: &[u8], n: u8, t: u8, rng: &mut impl RngCore) -> Result<Vec<KeyShare>> {
    if n == 0 || t == 0 || t > n {
        return Err(CoreError::InvalidConfig(format!(
            "invalid threshold parameters: t={t}, n={n}"
        )));
    }
    if secret.is_empty() {
        return Err(CoreError::EmptyPayload("private_key"));
    }

    // Per-byte polynomial coefficients: index 0 is the secret byte itself,
    // indices 1..t-1 are random. Column-major: `coeffs[byte_index]` is one
    // polynomial's coefficient vector.
    let mut coeffs: Vec<Zeroizing<Vec<u8>>> = Vec::with_capacity(secret.len());
    for &secret_byte in secret {
        let mut poly = Zeroizing::new(vec![0u8; t as usize]);
        poly[0] = secret_byte;
        for coeff in poly.iter_mut().skip(1) {
            let mut buf = [0u8; 1];
            rng.fill_bytes(&mut buf);
            *coeff = buf[0];
        }
        coeffs.push(poly);
    }

    let mut shares = Vec::with_capacity(n as usize);
    for i in 0..n {
        let x = i.wrapping_add(1); // ids are 1-based; x-coordinate 0 is reserved for the secret
        let mut share_bytes = Vec::with_capacity(secret.len() + 1);
        for poly in &coeffs {
            share_bytes.push(eval_polynomial(poly, x));
        }
        share_bytes.push(x);
        shares.push(KeyShare {
            id: x,
            share_bytes,
        });
    }

    Ok(shares)
}

/// The degenerate single-share case: threshold mode disabled, the private
/// key bytes are carried verbatim as share id 1 (spec.md §3).
pub fn single_share(secret: &[u8]) -> KeyShare {
    KeyShare {
        id: 1,
        share_bytes: secret.to_vec(),
    }
}

/// Reconstructs the secret from `shares` via Lagrange interpolation at x=0,
/// per byte position (spec.md §4.3 step 7, GLOSSARY's Shamir definition).
pub fn combine(shares: &[KeyShare]) -> Result<Vec<u8>> {
    if shares.is_empty() {
        return Err(CoreError::NotEnoughShares { need: 1, got: 0 });
    }

    let share_len = shares[0].share_bytes.len();
    if share_len < 2 {
        return Err(CoreError::MismatchedShareLengths);
    }
    if shares.iter().any(|s| s.share_bytes.len() != share_len) {
        return Err(CoreError::MismatchedShareLengths);
    }

    let mut xs = Vec::with_capacity(shares.len());
    let mut seen = std::collections::HashSet::new();
    for s in shares {
        let x = *s.share_bytes.last().expect("checked non-empty above");
        if x == 0 {
            return Err(CoreError::MismatchedShareLengths);
        }
        if !seen.insert(x) {
            return Err(CoreError::DuplicateShareId(x));
        }
        xs.push(x);
    }

    let secret_len = share_len - 1;
    let mut secret = vec![0u8; secret_len];

    for byte_idx in 0..secret_len {
        let mut acc = 0u8;
        for (i, share) in shares.iter().enumerate() {
            let xi = xs[i];
            let yi = share.share_bytes[byte_idx];

            // Lagrange basis polynomial l_i(0) = prod_{j != i} (0 - x_j) / (x_i - x_j),
            // evaluated in GF(256) where subtraction is XOR.
            let mut num = 1u8;
            let mut den = 1u8;
            for (j, &xj) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                num = gf256_mul(num, xj); // (0 - x_j) == x_j in GF(256)
                den = gf256_mul(den, xi ^ xj);
            }
            let li0 = gf256_div(num, den);
            acc ^= gf256_mul(yi, li0);
        }
        secret[byte_idx] = acc;
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn split_produces_n_shares_with_sequential_ids() {
        let secret = b"0123456789abcdef0123456789abcdef";
        let mut rng = OsRng;
        let shares = split(secret, 5, 4, &mut rng).unwrap();
        assert_eq!(shares.len(), 5);
        for (i, s) in shares.iter().enumerate() {
            assert_eq!(s.id as usize, i + 1);
        }
    }

    #[test]
    fn combine_any_threshold_subset_recovers_secret() {
        let secret: Vec<u8> = (0..32u8).collect();
        let mut rng = OsRng;
        let shares = split(&secret, 5, 4, &mut rng).unwrap();

        // any 4-of-5 subset must reconstruct byte-for-byte (S6)
        for skip in 0..shares.len() {
            let subset: Vec<KeyShare> = shares
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, s)| s.clone())
                .collect();
            let recovered = combine(&subset).unwrap();
            assert_eq!(recovered, secret);
        }
    }

    #[test]
    fn combine_with_all_shares_also_recovers_secret() {
        let secret: Vec<u8> = (0..32u8).collect();
        let mut rng = OsRng;
        let shares = split(&secret, 5, 4, &mut rng).unwrap();
        let recovered = combine(&shares).unwrap();
        assert_eq!(recovered, secret);
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let secret = b"abc";
        let mut rng = OsRng;
        assert!(split(secret, 5, 6, &mut rng).is_err());
        assert!(split(secret, 0, 1, &mut rng).is_err());
    }

    #[test]
    fn base64_round_trip_is_stable() {
        let share = KeyShare {
            id: 3,
            share_bytes: vec![1, 2, 3, 3],
        };
        let encoded = share.to_base64();
        let decoded = KeyShare::from_base64(3, &encoded).unwrap();
        assert_eq!(decoded.share_bytes, share.share_bytes);
    }
}
