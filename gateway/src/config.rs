//! CLI flags, matching `original_source/gateway-service/pkg/config/config.go`.

use clap::Parser;
use service_common::LogFormat;

#[derive(Debug, Parser, Clone)]
#[command(name = "gateway", about = "Gateway: orchestrates the threshold decryption protocol end-to-end")]
pub struct Config {
    #[arg(long = "http.public.address", env = "HTTP_PUBLIC_ADDRESS", default_value = "0.0.0.0:9000")]
    pub http_public_address: String,

    #[arg(long = "kms.http.public.address", env = "KMS_HTTP_PUBLIC_ADDRESS", default_value = "http://localhost:9001")]
    pub kms_http_address: String,

    #[arg(long = "ds.http.public.address", env = "DS_HTTP_PUBLIC_ADDRESS", default_value = "http://localhost:9002")]
    pub ds_http_address: String,

    #[arg(long = "logger.handler.type", env = "LOGGER_HANDLER_TYPE", default_value = "json")]
    pub logger_handler_type: String,

    #[arg(long = "logger.log.level", env = "LOGGER_LOG_LEVEL", default_value = "debug")]
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
