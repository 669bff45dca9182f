//! Public IP lookup.
//!
//! Asks an ipify-style "what is my IP" service for this machine's external
//! address, requesting the JSON form of the answer.

use async_trait::async_trait;
use log::info;
use url::Url;
use serde::Deserialize;

use crate::error_handling::{FlyoverError, Stage};
use crate::fetch::get_json;
use crate::models::IpAddress;

/// Resolves the caller's public IP address.
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Returns the public IP address of this machine.
    async fn resolve_my_ip(&self) -> Result<IpAddress, FlyoverError>;
}

/// `{ "ip": "<string>" }`
#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// [`IpResolver`] backed by an HTTP service.
#[derive(Debug, Clone)]
pub struct HttpIpResolver {
    client: reqwest::Client,
    service_url: Url,
}

impl HttpIpResolver {
    /// Creates a resolver querying `service_url`.
    pub fn new(client: reqwest::Client, service_url: Url) -> Self {
        Self {
            client,
            service_url,
        }
    }

    fn request_url(&self) -> Url {
        let mut url = self.service_url.clone();
        url.query_pairs_mut().append_pair("format", "json");
        url
    }
}

#[async_trait]
impl IpResolver for HttpIpResolver {
    async fn resolve_my_ip(&self) -> Result<IpAddress, FlyoverError> {
        let response: IpResponse = get_json(&self.client, self.request_url(), Stage::Ip).await?;
        info!("Resolved public IP {}", response.ip);
        Ok(response.ip)
    }
}
