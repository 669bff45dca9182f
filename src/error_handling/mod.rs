//! Error handling.
//!
//! This module provides:
//! - Error type definitions for lookup stages and initialization
//! - Categorization of transport errors for logging

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FlyoverError, InitializationError, Stage};
