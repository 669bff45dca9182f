//! Transport error categorization.
//!
//! Network failures keep their original `reqwest::Error`; this module only
//! produces a short label for log lines.

/// Categorizes a `reqwest::Error` into a short label.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// A static label such as `"timeout"` or `"connect"`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> &'static str {
    if error.is_builder() {
        "builder"
    } else if error.is_redirect() {
        "redirect"
    } else if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect"
    } else if error.is_request() {
        "request"
    } else if error.is_body() {
        "body"
    } else if error.is_decode() {
        "decode"
    } else {
        "other"
    }
}
