//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use url::Url;

use crate::config::constants::{
    DEFAULT_GEO_SERVICE_URL, DEFAULT_IP_SERVICE_URL, DEFAULT_ISS_SERVICE_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Configuration validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is expected
    pub message: String,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use iss_flyover::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Public IP lookup service
    pub ip_service_url: Url,

    /// IP geolocation service (IP appended as a path segment)
    pub geo_service_url: Url,

    /// ISS pass prediction service
    pub iss_service_url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ip_service_url: default_url(DEFAULT_IP_SERVICE_URL),
            geo_service_url: default_url(DEFAULT_GEO_SERVICE_URL),
            iss_service_url: default_url(DEFAULT_ISS_SERVICE_URL),
        }
    }
}

// The defaults are compile-time constants covered by test_config_default.
fn default_url(s: &str) -> Url {
    Url::parse(s).expect("default service URL constant is valid")
}

impl Config {
    /// Checks the configuration before any request is made.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }

        for (field, url) in [
            ("ip_service_url", &self.ip_service_url),
            ("geo_service_url", &self.geo_service_url),
            ("iss_service_url", &self.iss_service_url),
        ] {
            validate_service_url(field, url)?;
        }

        Ok(())
    }
}

fn validate_service_url(field: &'static str, url: &Url) -> Result<(), ConfigValidationError> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigValidationError {
            field,
            message: format!("expected an http or https URL, got scheme '{}'", url.scheme()),
        });
    }
    if url.cannot_be_a_base() {
        return Err(ConfigValidationError {
            field,
            message: format!("'{}' cannot be used as a base URL", url),
        });
    }
    Ok(())
}

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Next passes over the current location
/// iss_flyover
///
/// # Just the public IP, with request logging
/// iss_flyover ip --log-level debug
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "iss_flyover",
    version,
    about = "Shows the next times the ISS passes over your current location."
)]
pub struct Cli {
    /// What to look up (defaults to `next`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options shared by every subcommand
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the next ISS passes over the current location
    Next,
    /// Print the public IP address of this machine
    Ip,
    /// Print the approximate coordinates of this machine's public IP
    Coords,
}

/// Options accepted by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Public IP lookup service
    #[arg(long, global = true, default_value = DEFAULT_IP_SERVICE_URL)]
    pub ip_service_url: Url,

    /// IP geolocation service
    #[arg(long, global = true, default_value = DEFAULT_GEO_SERVICE_URL)]
    pub geo_service_url: Url,

    /// ISS pass prediction service
    #[arg(long, global = true, default_value = DEFAULT_ISS_SERVICE_URL)]
    pub iss_service_url: Url,
}

impl From<GlobalArgs> for Config {
    fn from(args: GlobalArgs) -> Self {
        Config {
            log_level: args.log_level,
            log_format: args.log_format,
            timeout_seconds: args.timeout_seconds,
            user_agent: args.user_agent,
            ip_service_url: args.ip_service_url,
            geo_service_url: args.geo_service_url,
            iss_service_url: args.iss_service_url,
        }
    }
}
