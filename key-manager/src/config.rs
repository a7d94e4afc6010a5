//! CLI flags, matching `original_source/key-management-service/pkg/config/config.go`
//! flag-for-flag (spec.md §6's configuration table).

use clap::Parser;
use service_common::LogFormat;

#[derive(Debug, Parser, Clone)]
#[command(name = "key-manager", about = "Key Manager: generates pairing params, keypair and shares")]
pub struct Config {
    #[arg(long = "http.public.address", env = "HTTP_PUBLIC_ADDRESS", default_value = "0.0.0.0:9001")]
    pub http_public_address: String,

    #[arg(long = "security.level", env = "SECURITY_LEVEL", default_value = "medium")]
    pub security_level: String,

    #[arg(long = "thresholdconfig.enabled", env = "THRESHOLDCONFIG_ENABLED", default_value_t = true)]
    pub threshold_enabled: bool,

    #[arg(long = "thresholdconfig.threshold", env = "THRESHOLDCONFIG_THRESHOLD", default_value_t = 4)]
    pub threshold: u8,

    #[arg(long = "thresholdconfig.shares", env = "THRESHOLDCONFIG_SHARES", default_value_t = 5)]
    pub total_shares: u8,

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
