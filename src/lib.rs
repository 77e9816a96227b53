use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::UpstreamConfig;
use crate::domain::coordinator::AvailabilitySlotCoordinator;
use crate::domain::resolver::AvailableRampResolver;
use crate::error::Result;
use crate::sources::http::HttpSources;

pub mod api;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod logger;
pub mod sources;

/// The two availability use cases wired to the HTTP upstreams.
///
/// Built once at startup and shared across requests; the underlying
/// `reqwest` client owns the connection pool.
#[derive(Debug)]
pub struct AvailabilityEngine {
    pub slots: AvailabilitySlotCoordinator,
    pub ramps: AvailableRampResolver,
}

impl AvailabilityEngine {
    pub fn from_config(config: UpstreamConfig) -> Result<AvailabilityEngine> {
        let sources = Arc::new(HttpSources::new(config.clone())?);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let slots = AvailabilitySlotCoordinator::new(sources.clone(), sources.clone(), clock, config.fetch_timeout);
        let ramps = AvailableRampResolver::new(sources.clone(), sources, config.fetch_timeout);

        Ok(AvailabilityEngine { slots, ramps })
    }
}
