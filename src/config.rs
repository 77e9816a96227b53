use std::time::Duration;

// Environment variable names for the upstream endpoints.
const ENV_RAMP_CATALOG_URL: &str = "RAMP_CATALOG_URL";
const ENV_SCHEDULE_URL: &str = "RAMP_SCHEDULE_URL";
const ENV_RESERVATION_URL: &str = "RESERVATION_URL";
const ENV_FETCH_TIMEOUT_S: &str = "UPSTREAM_FETCH_TIMEOUT_S";

/// Connection settings for the two upstream services the engine reads from.
///
/// The ramp catalog and the schedule windows live in the branch service,
/// reservations live in the reservation service. All values can be
/// overridden through environment variables; the defaults match the local
/// docker-compose setup.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub ramp_catalog_url: String,
    pub schedule_url: String,
    pub reservation_url: String,

    /// Upper bound for every single outbound fetch, including each
    /// per-ramp schedule fetch of the fan-out.
    pub fetch_timeout: Duration,

    /// Page limit passed to the ramp catalog listing.
    pub catalog_limit: u32,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            ramp_catalog_url: "http://localhost:8001".to_string(),
            schedule_url: "http://localhost:8001".to_string(),
            reservation_url: "http://localhost:8002".to_string(),
            fetch_timeout: Duration::from_secs(10),
            catalog_limit: 100,
        }
    }
}

impl UpstreamConfig {
    /// Builds the config from the environment, falling back to the defaults
    /// for every variable that is not set or does not parse.
    pub fn from_env() -> UpstreamConfig {
        let defaults = UpstreamConfig::default();

        let fetch_timeout = std::env::var(ENV_FETCH_TIMEOUT_S)
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.fetch_timeout);

        UpstreamConfig {
            ramp_catalog_url: std::env::var(ENV_RAMP_CATALOG_URL).unwrap_or(defaults.ramp_catalog_url),
            schedule_url: std::env::var(ENV_SCHEDULE_URL).unwrap_or(defaults.schedule_url),
            reservation_url: std::env::var(ENV_RESERVATION_URL).unwrap_or(defaults.reservation_url),
            fetch_timeout,
            catalog_limit: defaults.catalog_limit,
        }
    }
}
