//! Error type definitions.
//!
//! This module defines the errors produced by the lookup stages and by
//! application start-up.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro, IntoStaticStr};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The lookup stage an error originated from.
///
/// Stage errors are never rewrapped on their way out of the chain, so the
/// stage tag is the only way a caller can tell which lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display, IntoStaticStr)]
pub enum Stage {
    /// Public IP lookup
    #[strum(serialize = "IP")]
    Ip,
    /// IP geolocation lookup
    #[strum(serialize = "geo coordinates for IP")]
    Coordinates,
    /// ISS pass schedule lookup
    #[strum(serialize = "ISS flyover times")]
    PassTimes,
}

impl Stage {
    /// Returns the noun phrase used in error messages ("when fetching ...").
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Failure of a single lookup stage.
///
/// Every variant carries the [`Stage`] that produced it.
#[derive(Error, Debug)]
pub enum FlyoverError {
    /// Transport-level failure (DNS, connection refused, offline, timeout).
    ///
    /// The underlying `reqwest::Error` is kept as-is.
    #[error("Network error when fetching {stage}: {source}")]
    Network {
        /// Stage that issued the request
        stage: Stage,
        /// Underlying transport error
        #[source]
        source: ReqwestError,
    },

    /// The upstream service answered with a non-200 status.
    #[error("Status Code {status} when fetching {stage}. Response: {body}")]
    Upstream {
        /// Stage that issued the request
        stage: Stage,
        /// HTTP status code returned by the service
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// A 200 response whose body is not the JSON the stage expects.
    #[error("Malformed response when fetching {stage}: {reason}")]
    MalformedResponse {
        /// Stage that issued the request
        stage: Stage,
        /// What was wrong with the body
        reason: String,
    },

    /// The configured service URL cannot be used to build the request.
    #[error("Invalid endpoint when fetching {stage}: {url}")]
    InvalidEndpoint {
        /// Stage that tried to build the request
        stage: Stage,
        /// Offending base URL
        url: String,
    },
}

impl FlyoverError {
    /// Returns the stage this error came from.
    pub fn stage(&self) -> Stage {
        match self {
            FlyoverError::Network { stage, .. }
            | FlyoverError::Upstream { stage, .. }
            | FlyoverError::MalformedResponse { stage, .. }
            | FlyoverError::InvalidEndpoint { stage, .. } => *stage,
        }
    }
}
