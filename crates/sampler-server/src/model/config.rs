//! Configuration management for the Sampler server
//!
//! Configuration is layered: built-in defaults, then `conf/application.yml`,
//! then environment variables with the `SAMPLER` prefix, then command line
//! flags. Later sources override earlier ones.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};

use super::constants::{
    CACHE_CAPACITY_PROPERTY, CACHE_TTL_PROPERTY, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS,
    DEFAULT_MAX_STREAM_COUNT, DEFAULT_SERVER_ADDRESS, DEFAULT_SERVER_PORT,
    DEFAULT_SHUTDOWN_TIMEOUT_SECS, DEFAULT_STREAM_DELAY_MS, DEFAULT_TASK_DELAY_MS,
    DEFAULT_UPLOAD_LIMIT, LOGGING_CONSOLE_PROPERTY, LOGGING_DIR_PROPERTY, LOGGING_FILE_PROPERTY,
    LOGGING_LEVEL_PROPERTY, SERVER_ADDRESS_PROPERTY, SERVER_PORT_PROPERTY,
    SHUTDOWN_TIMEOUT_PROPERTY, STREAM_COUNT_PROPERTY, STREAM_DELAY_PROPERTY, TASK_DELAY_PROPERTY,
    UPLOAD_LIMIT_PROPERTY,
};
use crate::startup::LoggingConfig;

/// Command line arguments for the server
#[derive(Debug, Default, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'a', long = "address", env = "SAMPLER_ADDRESS")]
    address: Option<String>,
    #[arg(short = 'p', long = "port", env = "SAMPLER_PORT")]
    port: Option<u16>,
    #[arg(short = 'l', long = "log-dir", env = "SAMPLER_LOG_DIR")]
    log_dir: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    /// Load configuration, including command line arguments.
    pub fn new() -> Self {
        Self::from_cli(Cli::parse())
    }

    /// Load configuration from defaults, config file, and environment only.
    ///
    /// Skips command line parsing so it can run under arbitrary argv,
    /// such as the test harness.
    pub fn from_env() -> Self {
        Self::from_cli(Cli::default())
    }

    fn from_cli(args: Cli) -> Self {
        let mut config_builder = Config::builder()
            .add_source(config::File::with_name("conf/application.yml").required(false))
            .add_source(
                Environment::with_prefix("sampler")
                    .separator("_")
                    .try_parsing(true),
            );

        if let Some(v) = args.address {
            config_builder = config_builder
                .set_override(SERVER_ADDRESS_PROPERTY, v)
                .expect("Failed to set server address override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override(SERVER_PORT_PROPERTY, i64::from(v))
                .expect("Failed to set server port override");
        }
        if let Some(v) = args.log_dir {
            config_builder = config_builder
                .set_override(LOGGING_DIR_PROPERTY, v)
                .expect("Failed to set log directory override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS_PROPERTY)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT_PROPERTY)
            .unwrap_or(DEFAULT_SERVER_PORT.into()) as u16
    }

    pub fn shutdown_timeout(&self) -> Duration {
        let secs = self
            .config
            .get_int(SHUTDOWN_TIMEOUT_PROPERTY)
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS as i64) as u64;

        Duration::from_secs(secs)
    }

    // ========================================================================
    // Endpoint Behavior
    // ========================================================================

    pub fn upload_limit(&self) -> usize {
        self.config
            .get_int(UPLOAD_LIMIT_PROPERTY)
            .unwrap_or(DEFAULT_UPLOAD_LIMIT as i64) as usize
    }

    pub fn stream_delay(&self) -> Duration {
        let millis = self
            .config
            .get_int(STREAM_DELAY_PROPERTY)
            .unwrap_or(DEFAULT_STREAM_DELAY_MS as i64) as u64;

        Duration::from_millis(millis)
    }

    pub fn stream_max_count(&self) -> u64 {
        self.config
            .get_int(STREAM_COUNT_PROPERTY)
            .unwrap_or(DEFAULT_MAX_STREAM_COUNT as i64) as u64
    }

    pub fn cache_ttl(&self) -> Duration {
        let secs = self
            .config
            .get_int(CACHE_TTL_PROPERTY)
            .unwrap_or(DEFAULT_CACHE_TTL_SECS as i64) as u64;

        Duration::from_secs(secs)
    }

    pub fn cache_capacity(&self) -> u64 {
        self.config
            .get_int(CACHE_CAPACITY_PROPERTY)
            .unwrap_or(DEFAULT_CACHE_CAPACITY as i64) as u64
    }

    pub fn task_delay(&self) -> Duration {
        let millis = self
            .config
            .get_int(TASK_DELAY_PROPERTY)
            .unwrap_or(DEFAULT_TASK_DELAY_MS as i64) as u64;

        Duration::from_millis(millis)
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string(LOGGING_DIR_PROPERTY).ok(),
            self.config.get_bool(LOGGING_CONSOLE_PROPERTY).unwrap_or(true),
            self.config.get_bool(LOGGING_FILE_PROPERTY).unwrap_or(true),
            self.config
                .get_string(LOGGING_LEVEL_PROPERTY)
                .unwrap_or("info".to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_binding() {
        let configuration = Configuration::from_env();
        assert_eq!(configuration.server_address(), "127.0.0.1");
        assert_eq!(configuration.server_port(), 8000);
    }

    #[test]
    fn test_default_endpoint_behavior() {
        let configuration = Configuration::from_env();
        assert_eq!(configuration.upload_limit(), DEFAULT_UPLOAD_LIMIT);
        assert_eq!(configuration.stream_delay(), Duration::from_millis(100));
        assert_eq!(configuration.stream_max_count(), 1000);
        assert_eq!(configuration.cache_capacity(), 10_000);
        assert_eq!(configuration.cache_ttl(), Duration::from_secs(300));
        assert_eq!(configuration.shutdown_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_logging_config_defaults() {
        let configuration = Configuration::from_env();
        let logging = configuration.logging_config();
        assert!(logging.console_output);
    }
}
