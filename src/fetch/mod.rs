//! HTTP fetching shared by the lookup stages.
//!
//! Each stage issues exactly one GET through [`get_json`]. The function maps
//! the outcome onto the stage's error taxonomy:
//! - transport failure -> [`FlyoverError::Network`] (original `reqwest::Error` kept)
//! - any status other than 200 -> [`FlyoverError::Upstream`] with status and raw body
//! - undecodable 200 body -> [`FlyoverError::MalformedResponse`]
//!
//! There is no retry here.

use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error_handling::{categorize_reqwest_error, FlyoverError, Stage};

/// Sends one GET request and decodes the JSON body of a 200 response.
///
/// # Arguments
///
/// * `client` - HTTP client to send the request with
/// * `url` - Fully built request URL (path and query included)
/// * `stage` - Stage tag attached to any error
///
/// # Errors
///
/// See the module docs for the mapping of failures onto [`FlyoverError`].
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: Url,
    stage: Stage,
) -> Result<T, FlyoverError> {
    debug!("Fetching {} from {}", stage, url);

    let response = client.get(url.clone()).send().await.map_err(|source| {
        debug!(
            "Request for {} to {} failed ({}): {}",
            stage,
            url,
            categorize_reqwest_error(&source),
            source
        );
        FlyoverError::Network { stage, source }
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        // The body is only diagnostic here; an unreadable one is reported as empty
        let body = response.text().await.unwrap_or_default();
        debug!("Status {} when fetching {} from {}", status, stage, url);
        return Err(FlyoverError::Upstream {
            stage,
            status: status.as_u16(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FlyoverError::Network { stage, source })?;
    debug!("Received {} bytes for {}", body.len(), stage);

    decode_body(&body, stage)
}

/// Decodes a response body, reporting failures as `MalformedResponse`.
pub(crate) fn decode_body<T: DeserializeOwned>(
    body: &str,
    stage: Stage,
) -> Result<T, FlyoverError> {
    serde_json::from_str(body).map_err(|e| FlyoverError::MalformedResponse {
        stage,
        reason: e.to_string(),
    })
}
