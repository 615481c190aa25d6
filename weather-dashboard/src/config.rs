//! Command-line and environment configuration
//!
//! The provider API key is never compiled in. It comes from `--api-key` or
//! `OPENWEATHER_API_KEY` and is validated before the terminal is touched.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::logging::{LogLevel, LoggingOptions};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TICK_MS: u64 = 120;

/// Weather Dashboard - current conditions and a 24-hour forecast chart
#[derive(Parser, Debug)]
#[command(name = "weather-dashboard", version)]
#[command(about = "Terminal weather dashboard backed by OpenWeatherMap")]
pub struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Provider base URL
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// City to search for on startup
    #[arg(long, short)]
    pub city: Option<String>,

    /// Only fetch current conditions (no hourly forecast chart)
    #[arg(long)]
    pub no_forecast: bool,

    /// Spinner animation interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Log verbosity (RUST_LOG takes precedence when set)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log file path (defaults to the system temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no API key configured; pass --api-key or set OPENWEATHER_API_KEY")]
    MissingApiKey,

    #[error("invalid base URL '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    #[error("timeout must be greater than zero seconds")]
    ZeroTimeout,

    #[error("tick interval must be greater than zero milliseconds")]
    ZeroTick,
}

/// Settings for [`OpenWeatherClient`](crate::client::OpenWeatherClient).
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    /// Base URL without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fail fast on settings that can never produce a working client.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

// Keep the key out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Validated application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub initial_city: Option<String>,
    pub forecast_enabled: bool,
    pub tick_interval: Duration,
    pub logging: LoggingOptions,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_key = args.api_key.ok_or(ConfigError::MissingApiKey)?;
        let client = ClientConfig::new(api_key, args.base_url)
            .with_timeout(Duration::from_secs(args.timeout_secs));
        client.validate()?;

        if args.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        let initial_city = args
            .city
            .map(|city| city.trim().to_string())
            .filter(|city| !city.is_empty());

        Ok(Self {
            client,
            initial_city,
            forecast_enabled: !args.no_forecast,
            tick_interval: Duration::from_millis(args.tick_ms),
            logging: LoggingOptions {
                level: args.log_level,
                file: args.log_file.unwrap_or_else(LoggingOptions::default_file),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["weather-dashboard"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_from_args_defaults() {
        let config = Config::from_args(parse(&["--api-key", "KEY"])).unwrap();

        assert_eq!(config.client.api_key, "KEY");
        assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.client.timeout, Duration::from_secs(10));
        assert!(config.forecast_enabled);
        assert!(config.initial_city.is_none());
        assert_eq!(config.tick_interval, Duration::from_millis(DEFAULT_TICK_MS));
    }

    #[test]
    fn test_from_args_overrides() {
        let config = Config::from_args(parse(&[
            "--api-key",
            "KEY",
            "--base-url",
            "http://localhost:9000/data/2.5/",
            "--timeout-secs",
            "3",
            "--city",
            "  London ",
            "--no-forecast",
        ]))
        .unwrap();

        assert_eq!(config.client.base_url, "http://localhost:9000/data/2.5");
        assert_eq!(config.client.timeout, Duration::from_secs(3));
        assert_eq!(config.initial_city.as_deref(), Some("London"));
        assert!(!config.forecast_enabled);
    }

    #[test]
    fn test_blank_city_is_ignored() {
        let config = Config::from_args(parse(&["--api-key", "KEY", "--city", "   "])).unwrap();
        assert!(config.initial_city.is_none());
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        let client = ClientConfig::new("   ", DEFAULT_BASE_URL);
        assert_eq!(client.validate(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let client = ClientConfig::new("KEY", "ftp://example.com");
        assert!(matches!(
            client.validate(),
            Err(ConfigError::InvalidBaseUrl(url)) if url == "ftp://example.com"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let client = ClientConfig::new("KEY", DEFAULT_BASE_URL).with_timeout(Duration::ZERO);
        assert_eq!(client.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let err = Config::from_args(parse(&["--api-key", "KEY", "--tick-ms", "0"])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTick);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = ClientConfig::new("SECRET", DEFAULT_BASE_URL);
        let debug = format!("{:?}", client);
        assert!(!debug.contains("SECRET"));
        assert!(debug.contains("<redacted>"));
    }
}
