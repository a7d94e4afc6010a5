//! The HTTP-facing error taxonomy. See spec.md §7 "Error Handling Design".

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use pairing_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Error kinds and their HTTP surface, verbatim from spec.md §7's table.
#[derive(Debug, Error)]
pub enum AppError {
    /// Threshold/shares violate invariants. Fatal at init; never surfaced
    /// over HTTP in steady state, but implements `ResponseError` anyway so
    /// it can flow through the same `Result<_, AppError>` plumbing as the
    /// other kinds before the caller decides to exit the process.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed input, empty required field.
    #[error("validation failed on field \"{field}\": {message}")]
    ValidationError { field: String, message: String },

    /// Crypto precondition failed (zero element).
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// Downstream returned non-2xx or was unreachable, or required state
    /// was empty.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Unexpected; includes combine failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Converts a cryptographic-core error into its HTTP-facing counterpart.
/// `pairing-core` never makes this decision itself — it has no notion of
/// HTTP status codes — so the mapping lives here, at the service boundary.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidConfig(msg) => AppError::InvalidConfig(msg),
            CoreError::ZeroPrivateKey => AppError::Unprocessable("private key is zero".into()),
            CoreError::ZeroGenerator => AppError::Unprocessable("generator element is zero".into()),
            CoreError::ZeroPublicKey => AppError::Unprocessable("public key is zero".into()),
            CoreError::ZeroShareElement => AppError::Unprocessable("share element is zero".into()),
            CoreError::ZeroCiphertextElement => {
                AppError::Unprocessable("ciphertext element is zero".into())
            }
            CoreError::EmptyPayload(field) => {
                AppError::validation(field, "payload must not be empty")
            }
            CoreError::Base64(e) => AppError::validation("payload", format!("invalid base64: {e}")),
            CoreError::ParamsGeneration => {
                AppError::Internal("failed to generate pairing parameters".into())
            }
            CoreError::ParamsDecode(msg) => AppError::Internal(format!("malformed pairing params: {msg}")),
            CoreError::NotEnoughShares { need, got } => AppError::Internal(format!(
                "not enough shares to reconstruct secret: need {need}, got {got}"
            )),
            CoreError::DuplicateShareId(id) => {
                AppError::Internal(format!("duplicate share id: {id}"))
            }
            CoreError::MismatchedShareLengths => {
                AppError::Internal("shares have mismatched lengths".into())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let field = match self {
            AppError::ValidationError { field, .. } => Some(field.clone()),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            field,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_400() {
        let err = AppError::validation("ciphertext", "payload must not be empty");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unprocessable_maps_to_422() {
        let err = AppError::Unprocessable("share element is zero".into());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn zero_share_core_error_maps_to_unprocessable() {
        let app_err: AppError = CoreError::ZeroShareElement.into();
        assert_eq!(app_err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn empty_payload_core_error_maps_to_validation() {
        let app_err: AppError = CoreError::EmptyPayload("ciphertext").into();
        assert_eq!(app_err.status_code(), StatusCode::BAD_REQUEST);
    }
}
