use thiserror::Error;

/// Errors raised by the cryptographic core. Every variant here is a failure
/// mode named explicitly in spec.md §4 and §7; callers at the HTTP boundary
/// map these onto the `AppError` taxonomy in `service-common`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid threshold configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to generate pairing parameters")]
    ParamsGeneration,

    #[error("failed to decode pairing parameters: {0}")]
    ParamsDecode(String),

    #[error("private key is zero")]
    ZeroPrivateKey,

    #[error("generator element is zero")]
    ZeroGenerator,

    #[error("public key is zero")]
    ZeroPublicKey,

    #[error("share element is zero")]
    ZeroShareElement,

    #[error("ciphertext element is zero")]
    ZeroCiphertextElement,

    #[error("payload is empty: {0}")]
    EmptyPayload(&'static str),

    #[error("invalid base64 encoding: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("not enough shares to reconstruct secret: need {need}, got {got}")]
    NotEnoughShares { need: usize, got: usize },

    #[error("duplicate share id: {0}")]
    DuplicateShareId(u8),

    #[error("shares have mismatched lengths")]
    MismatchedShareLengths,
}

pub type Result<T> = std::result::Result<T, CoreError>;
