//! Coordinates lookup for an IP address.

use async_trait::async_trait;
use log::info;
use url::Url;
use serde::Deserialize;

use crate::error_handling::{FlyoverError, Stage};
use crate::fetch::get_json;
use crate::models::Coordinates;

/// Resolves an IP address to geographic coordinates.
#[async_trait]
pub trait CoordinatesResolver: Send + Sync {
    /// Returns the approximate coordinates of `ip`.
    async fn resolve_coordinates(&self, ip: &str) -> Result<Coordinates, FlyoverError>;
}

/// The fields we use from the service's answer; everything else is ignored.
#[derive(Debug, Deserialize)]
struct GeoResponse {
    latitude: f64,
    longitude: f64,
}

/// [`CoordinatesResolver`] backed by an HTTP service.
#[derive(Debug, Clone)]
pub struct HttpCoordinatesResolver {
    client: reqwest::Client,
    service_url: Url,
}

impl HttpCoordinatesResolver {
    /// Creates a resolver querying `service_url`.
    pub fn new(client: reqwest::Client, service_url: Url) -> Self {
        Self {
            client,
            service_url,
        }
    }

    /// Appends `ip` to the service URL as one percent-encoded path segment.
    fn request_url(&self, ip: &str) -> Result<Url, FlyoverError> {
        let mut url = self.service_url.clone();
        url.path_segments_mut()
            .map_err(|_| FlyoverError::InvalidEndpoint {
                stage: Stage::Coordinates,
                url: self.service_url.to_string(),
            })?
            .pop_if_empty()
            .push(ip);
        Ok(url)
    }
}

#[async_trait]
impl CoordinatesResolver for HttpCoordinatesResolver {
    async fn resolve_coordinates(&self, ip: &str) -> Result<Coordinates, FlyoverError> {
        let url = self.request_url(ip)?;
        let response: GeoResponse = get_json(&self.client, url, Stage::Coordinates).await?;
        let coords = Coordinates {
            latitude: response.latitude,
            longitude: response.longitude,
        };
        info!(
            "Resolved {} to latitude {}, longitude {}",
            ip, coords.latitude, coords.longitude
        );
        Ok(coords)
    }
}
