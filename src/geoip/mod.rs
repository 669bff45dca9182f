//! IP geolocation lookup.
//!
//! This module resolves an IP address to approximate coordinates through a
//! freegeoip-style HTTP service (`GET <service>/<ip>`).

mod lookup;

// Re-export public API
pub use lookup::{CoordinatesResolver, HttpCoordinatesResolver};
