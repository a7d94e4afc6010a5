//! CLI flags, matching `original_source/threshold-decryption-service/pkg/config/config.go`.

use clap::Parser;
use service_common::LogFormat;

#[derive(Debug, Parser, Clone)]
#[command(name = "partial-decryptor", about = "Partial Decryptor: serves ciphertext challenges and partial decryptions")]
pub struct Config {
    #[arg(long = "http.public.address", env = "HTTP_PUBLIC_ADDRESS", default_value = "0.0.0.0:9002")]
    pub http_public_address: String,

    #[arg(long = "kms.http.public.address", env = "KMS_HTTP_PUBLIC_ADDRESS", default_value = "http://localhost:9001")]
    pub kms_http_address: String,

    #[arg(long = "logger.handler.type", env = "LOGGER_HANDLER_TYPE", default_value = "json")]
    pub logger_handler_type: String,

    #[arg(long = "logger.log.level", env = "LOGGER_LOG_LEVEL", default_value = "info")]
    pub logger_log_level: String,
}

impl Config {
    pub fn load() -> Self {
        Config::parse()
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.logger_handler_type)
    }
}
