//! Configuration constants.
//!
//! Default service endpoints and HTTP client settings.

/// Public IP lookup service (queried with `?format=json`)
pub const DEFAULT_IP_SERVICE_URL: &str = "https://api.ipify.org";

/// IP geolocation service; the IP is appended as the last path segment
pub const DEFAULT_GEO_SERVICE_URL: &str = "https://freegeoip.app/json";

/// ISS pass prediction service (queried with `?lat=..&lon=..`)
pub const DEFAULT_ISS_SERVICE_URL: &str = "http://api.open-notify.org/iss-pass.json";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("iss_flyover/", env!("CARGO_PKG_VERSION"));

/// Date format for pass lines, e.g. `Sun Sep 13 2020 05:26:40 GMT-0700`
pub const PASS_TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";
