//! ISS pass schedule lookup.
//!
//! Queries an open-notify-style service (`GET <service>?lat=..&lon=..`) for the
//! upcoming passes over a position. Passes are returned in the order the
//! service sends them.

use async_trait::async_trait;
use log::info;
use url::Url;
use serde::Deserialize;

use crate::error_handling::{FlyoverError, Stage};
use crate::fetch::get_json;
use crate::models::{Coordinates, PassWindow};

/// Fetches upcoming ISS passes for a position.
#[async_trait]
pub trait PassTimesFetcher: Send + Sync {
    /// Returns the upcoming passes over `coords`.
    async fn fetch_pass_times(
        &self,
        coords: &Coordinates,
    ) -> Result<Vec<PassWindow>, FlyoverError>;
}

/// Success: `{ "message": "success", "response": [...] }`.
/// Failure: `{ "message": "failure", "reason": "..." }`.
#[derive(Debug, Deserialize)]
struct PassResponse {
    response: Option<Vec<PassWindow>>,
    reason: Option<String>,
}

/// [`PassTimesFetcher`] backed by an HTTP service.
#[derive(Debug, Clone)]
pub struct HttpPassTimesFetcher {
    client: reqwest::Client,
    service_url: Url,
}

impl HttpPassTimesFetcher {
    /// Creates a fetcher querying `service_url`.
    pub fn new(client: reqwest::Client, service_url: Url) -> Self {
        Self {
            client,
            service_url,
        }
    }

    fn request_url(&self, coords: &Coordinates) -> Url {
        let mut url = self.service_url.clone();
        url.query_pairs_mut()
            .append_pair("lat", &coords.latitude.to_string())
            .append_pair("lon", &coords.longitude.to_string());
        url
    }
}

#[async_trait]
impl PassTimesFetcher for HttpPassTimesFetcher {
    async fn fetch_pass_times(
        &self,
        coords: &Coordinates,
    ) -> Result<Vec<PassWindow>, FlyoverError> {
        let url = self.request_url(coords);
        let response: PassResponse = get_json(&self.client, url, Stage::PassTimes).await?;

        match response {
            PassResponse {
                response: Some(passes),
                ..
            } => {
                info!("Received {} upcoming passes", passes.len());
                Ok(passes)
            }
            PassResponse {
                response: None,
                reason: Some(reason),
            } => Err(FlyoverError::MalformedResponse {
                stage: Stage::PassTimes,
                reason: format!("no `response` field, service reported: {}", reason),
            }),
            PassResponse {
                response: None,
                reason: None,
            } => Err(FlyoverError::MalformedResponse {
                stage: Stage::PassTimes,
                reason: "missing field `response`".to_string(),
            }),
        }
    }
}
