//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (service endpoints, timeouts)
//! - The library `Config` and its validation
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Command, Config, ConfigValidationError, GlobalArgs, LogFormat, LogLevel};
