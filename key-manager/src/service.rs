//! The Key Manager's one-shot init sequence and the immutable state it
//! produces. See spec.md §4.1.

use pairing_core::{shamir, CoreError, Keypair, PairingParams, SecurityLevel};
use zeroize::Zeroizing;

use crate::config::Config;

/// Everything KM serves for the rest of the process lifetime, all built
/// during `init` and never mutated afterward (spec.md §4.1's lifecycle
/// note, §5's "no mutex needed" resolution in DESIGN.md).
pub struct KeyManagerState {
    pub encoded_params: String,
    pub keypair: Keypair,
    pub shares: Vec<shamir::KeyShare>,
}

impl KeyManagerState {
    /// Runs the 8-step startup sequence of spec.md §4.1 in order. Each step
    /// that can fail returns a `CoreError`; callers (here, `main`) treat any
    /// error as fatal and exit the process without binding a port.
    pub fn init(config: &Config) -> Result<Self, CoreError> {
        // steps 1-2: resolve (q, r) from the configured level, generate params
        let level = SecurityLevel::parse(&config.security_level);
        let params = PairingParams::generate(level)?;

        // step 3: store params as base64 of their textual encoding
        let encoded_params = params.to_base64();

        // step 4: "create a pairing instance" — see pairing-core::params::Pairing
        let _pairing = pairing_core::Pairing::from_params(params)?;

        // steps 5-7: draw private_key, draw g2, compute public_key, fail-fast on zero
        let mut rng = rand::rngs::OsRng;
        let keypair = Keypair::generate(&mut rng)?;

        // step 8: split private_key bytes into shares (or the degenerate single share).
        // Zeroized on drop per spec.md §9's "zero the plaintext private key buffer" note.
        let private_key_bytes = Zeroizing::new(keypair.private_key.to_bytes_be());
        let shares = if config.threshold_enabled {
            validate_threshold(config.threshold, config.total_shares)?;
            shamir::split(&private_key_bytes, config.total_shares, config.threshold, &mut rng)?
        } else {
            vec![shamir::single_share(&private_key_bytes)]
        };

        Ok(KeyManagerState {
            encoded_params,
            keypair,
            shares,
        })
    }
}

/// Validation preconditions for threshold mode (spec.md §4.1): `t <= n`,
/// `t >= 1`, `n >= 1`.
fn validate_threshold(threshold: u8, total_shares: u8) -> Result<(), CoreError> {
    if total_shares < 1 || threshold < 1 {
        return Err(CoreError::InvalidConfig(
            "threshold and total shares must be at least 1".into(),
        ));
    }
    if threshold > total_shares {
        return Err(CoreError::InvalidConfig(
            "threshold cannot be greater than total shares".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(threshold: u8, total_shares: u8) -> Config {
        Config {
            http_public_address: "0.0.0.0:9001".into(),
            security_level: "medium".into(),
            threshold_enabled: true,
            threshold,
            total_shares,
            logger_handler_type: "json".into(),
            logger_log_level: "debug".into(),
        }
    }

    #[test]
    fn default_config_produces_five_sequential_shares() {
        let cfg = config(4, 5);
        let state = KeyManagerState::init(&cfg).unwrap();
        assert_eq!(state.shares.len(), 5);
        for (i, s) in state.shares.iter().enumerate() {
            assert_eq!(s.id as usize, i + 1);
        }
    }

    #[test]
    fn public_key_is_never_identity() {
        let cfg = config(4, 5);
        let state = KeyManagerState::init(&cfg).unwrap();
        assert!(!state.keypair.public_key.is_identity());
    }

    #[test]
    fn invalid_threshold_fails_before_any_shares_are_produced() {
        let cfg = config(6, 5);
        assert!(KeyManagerState::init(&cfg).is_err());
    }

    #[test]
    fn disabled_threshold_yields_single_verbatim_share() {
        let mut cfg = config(4, 5);
        cfg.threshold_enabled = false;
        let state = KeyManagerState::init(&cfg).unwrap();
        assert_eq!(state.shares.len(), 1);
        assert_eq!(state.shares[0].id, 1);
        assert_eq!(
            state.shares[0].share_bytes,
            state.keypair.private_key.to_bytes_be()
        );
    }
}
