//! Cross-cutting plumbing shared by `key-manager`, `partial-decryptor` and
//! `gateway`: the HTTP error taxonomy, wire DTOs, logging initialization,
//! an HTTP client wrapper, and the ambient health route.

pub mod dto;
pub mod error;
pub mod health;
pub mod http_client;
pub mod logging;

pub use error::AppError;
pub use http_client::ServiceClient;
pub use logging::{init_logging, LogFormat};
