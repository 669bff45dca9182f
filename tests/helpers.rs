// Shared test helpers: stub lookup stages that count their invocations.

#![allow(dead_code)] // Not every test file uses every helper

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use iss_flyover::geoip::CoordinatesResolver;
use iss_flyover::ip::IpResolver;
use iss_flyover::passes::PassTimesFetcher;
use iss_flyover::{Coordinates, FlyoverError, IpAddress, PassWindow, Stage};

type Outcome<T> = Arc<dyn Fn() -> Result<T, FlyoverError> + Send + Sync>;

pub const TEST_IP: &str = "1.2.3.4";

pub const TEST_COORDS: Coordinates = Coordinates {
    latitude: 49.8625,
    longitude: -119.5833,
};

pub fn test_passes() -> Vec<PassWindow> {
    vec![PassWindow {
        risetime: 1600000000,
        duration: 600,
    }]
}

pub fn upstream(stage: Stage, status: u16, body: &str) -> FlyoverError {
    FlyoverError::Upstream {
        stage,
        status,
        body: body.to_string(),
    }
}

/// Stub IP stage.
#[derive(Clone)]
pub struct StubIp {
    pub calls: Arc<AtomicUsize>,
    outcome: Outcome<IpAddress>,
}

impl StubIp {
    pub fn ok(ip: &str) -> Self {
        let ip = ip.to_string();
        Self::with(move || Ok(ip.clone()))
    }

    pub fn with(f: impl Fn() -> Result<IpAddress, FlyoverError> + Send + Sync + 'static) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome: Arc::new(f),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IpResolver for StubIp {
    async fn resolve_my_ip(&self) -> Result<IpAddress, FlyoverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.outcome)()
    }
}

/// Stub geolocation stage; records the IPs it was asked about.
#[derive(Clone)]
pub struct StubGeo {
    pub seen: Arc<Mutex<Vec<String>>>,
    outcome: Outcome<Coordinates>,
}

impl StubGeo {
    pub fn ok(coords: Coordinates) -> Self {
        Self::with(move || Ok(coords))
    }

    pub fn with(f: impl Fn() -> Result<Coordinates, FlyoverError> + Send + Sync + 'static) -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
            outcome: Arc::new(f),
        }
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CoordinatesResolver for StubGeo {
    async fn resolve_coordinates(&self, ip: &str) -> Result<Coordinates, FlyoverError> {
        self.seen.lock().unwrap().push(ip.to_string());
        (self.outcome)()
    }
}

/// Stub pass-times stage; records the coordinates it was asked about.
#[derive(Clone)]
pub struct StubPasses {
    pub seen: Arc<Mutex<Vec<Coordinates>>>,
    outcome: Outcome<Vec<PassWindow>>,
}

impl StubPasses {
    pub fn ok(passes: Vec<PassWindow>) -> Self {
        Self::with(move || Ok(passes.clone()))
    }

    pub fn with(
        f: impl Fn() -> Result<Vec<PassWindow>, FlyoverError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
            outcome: Arc::new(f),
        }
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn seen(&self) -> Vec<Coordinates> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl PassTimesFetcher for StubPasses {
    async fn fetch_pass_times(
        &self,
        coords: &Coordinates,
    ) -> Result<Vec<PassWindow>, FlyoverError> {
        self.seen.lock().unwrap().push(*coords);
        (self.outcome)()
    }
}
