//! iss_flyover library: next ISS passes over the current location
//!
//! The lookup is a chain of three dependent HTTP calls:
//! 1. this machine's public IP address ([`ip`])
//! 2. the approximate coordinates of that IP ([`geoip`])
//! 3. the upcoming ISS passes over those coordinates ([`passes`])
//!
//! [`FlyoverChain`] runs them in order and stops at the first failure.
//!
//! # Example
//!
//! ```no_run
//! use iss_flyover::{next_pass_times_for_current_location, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let passes = next_pass_times_for_current_location(&Config::default()).await?;
//! for pass in passes {
//!     println!("rise at {} for {}s", pass.risetime, pass.duration);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod geoip;
pub mod initialization;
pub mod ip;
mod models;
pub mod passes;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FlyoverError, InitializationError, Stage};
pub use models::{Coordinates, IpAddress, PassWindow};
pub use run::{next_pass_times_for_current_location, FlyoverChain, HttpFlyoverChain};

// Internal run module (contains the lookup chain)
mod run {
    use log::debug;

    use crate::config::Config;
    use crate::error_handling::{FlyoverError, InitializationError};
    use crate::geoip::{CoordinatesResolver, HttpCoordinatesResolver};
    use crate::initialization::init_client;
    use crate::ip::{HttpIpResolver, IpResolver};
    use crate::models::{Coordinates, IpAddress, PassWindow};
    use crate::passes::{HttpPassTimesFetcher, PassTimesFetcher};

    /// The three lookup stages, composed in dependency order.
    ///
    /// Holds no mutable state, so one chain can be invoked any number of
    /// times, including concurrently, and each invocation is independent.
    #[derive(Debug, Clone)]
    pub struct FlyoverChain<I, G, P> {
        ip_resolver: I,
        coordinates_resolver: G,
        pass_times_fetcher: P,
    }

    /// Chain backed by the HTTP services named in a [`Config`].
    pub type HttpFlyoverChain =
        FlyoverChain<HttpIpResolver, HttpCoordinatesResolver, HttpPassTimesFetcher>;

    impl<I, G, P> FlyoverChain<I, G, P>
    where
        I: IpResolver,
        G: CoordinatesResolver,
        P: PassTimesFetcher,
    {
        /// Composes a chain from its three stages.
        pub fn new(ip_resolver: I, coordinates_resolver: G, pass_times_fetcher: P) -> Self {
            Self {
                ip_resolver,
                coordinates_resolver,
                pass_times_fetcher,
            }
        }

        /// Resolves the public IP (first stage only).
        pub async fn my_ip(&self) -> Result<IpAddress, FlyoverError> {
            self.ip_resolver.resolve_my_ip().await
        }

        /// Resolves the public IP, then its coordinates.
        pub async fn my_coordinates(&self) -> Result<Coordinates, FlyoverError> {
            let ip = self.ip_resolver.resolve_my_ip().await?;
            self.coordinates_resolver.resolve_coordinates(&ip).await
        }

        /// Runs the whole chain: IP, then coordinates, then pass times.
        ///
        /// The first failing stage ends the run and its error is returned
        /// unchanged; later stages are never invoked. No stage is retried.
        pub async fn next_pass_times(&self) -> Result<Vec<PassWindow>, FlyoverError> {
            let coords = self.my_coordinates().await?;
            let passes = self.pass_times_fetcher.fetch_pass_times(&coords).await?;
            debug!("Lookup chain finished with {} passes", passes.len());
            Ok(passes)
        }
    }

    impl HttpFlyoverChain {
        /// Builds the HTTP-backed chain from `config`.
        ///
        /// # Errors
        ///
        /// Returns `InitializationError::HttpClientError` if the HTTP client
        /// cannot be built.
        pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
            let client = init_client(config)?;
            Ok(FlyoverChain::new(
                HttpIpResolver::new(client.clone(), config.ip_service_url.clone()),
                HttpCoordinatesResolver::new(client.clone(), config.geo_service_url.clone()),
                HttpPassTimesFetcher::new(client, config.iss_service_url.clone()),
            ))
        }
    }

    /// Looks up the next ISS passes over this machine's current location.
    ///
    /// Convenience wrapper around [`HttpFlyoverChain::from_config`] and
    /// [`FlyoverChain::next_pass_times`].
    ///
    /// # Errors
    ///
    /// Returns an `anyhow::Error` wrapping either the client initialization
    /// failure or the [`FlyoverError`] of the first failing stage, which can be
    /// recovered with `downcast_ref::<FlyoverError>()`.
    pub async fn next_pass_times_for_current_location(
        config: &Config,
    ) -> anyhow::Result<Vec<PassWindow>> {
        let chain = HttpFlyoverChain::from_config(config)?;
        Ok(chain.next_pass_times().await?)
    }
}
