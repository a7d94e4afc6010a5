//! Cryptographic core of the threshold decryption service: pairing
//! parameters, scalar and group element types, keypair generation, and
//! Shamir secret sharing over the private key's byte encoding.
//!
//! Nothing in this crate knows about HTTP, configuration files, or process
//! lifecycle — those live in `service-common` and the three service
//! binaries. This crate only knows how to generate, encode, decode and
//! combine the cryptographic objects those services pass around.

pub mod error;
pub mod group;
pub mod keys;
pub mod params;
pub mod scalar;
pub mod shamir;

pub use error::{CoreError, Result};
pub use group::{GroupElement, G1, G2};
pub use keys::Keypair;
pub use params::{Pairing, PairingParams, SecurityLevel};
pub use scalar::Zr;
pub use shamir::KeyShare;
