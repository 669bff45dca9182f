//! Data carried between the lookup stages.
//!
//! Everything here is transient: produced by one stage, consumed by the next,
//! and dropped once the pass times are delivered.

use serde::{Deserialize, Serialize};

/// Public IP address as reported by the IP lookup service.
///
/// Kept in textual form; no parsing or validation is applied.
pub type IpAddress = String;

/// Approximate geographic position of an IP address.
///
/// Values are passed through exactly as the geolocation service returns them,
/// without range checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// One predicted ISS pass over a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassWindow {
    /// Start of the pass (Unix epoch seconds)
    pub risetime: i64,
    /// Visible duration in seconds
    pub duration: i64,
}
