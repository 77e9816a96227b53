use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::api::DATETIME_FORMAT;
use crate::api::ramp_dto::RampDto;
use crate::api::reservation_dto::ReservationDto;
use crate::api::schedule_dto::ScheduleWindowDto;
use crate::config::UpstreamConfig;
use crate::domain::ramp::Ramp;
use crate::domain::reservation::{ReservationStatus, ReservationWindow};
use crate::domain::schedule_window::ScheduleWindow;
use crate::error::{Error, Result};
use crate::sources::endpoint::UpstreamEndpoint;
use crate::sources::{RampCatalogSource, ReservationConflictSource, ScheduleWindowSource};

/// All three collaborator sources backed by one shared, pooled HTTP client.
///
/// The client is built once and reused for every request; connection pooling
/// belongs here, not at the call sites. The struct itself is stateless and
/// safe to share across concurrent requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct HttpSources {
    client: Client,
    config: UpstreamConfig,
}

impl HttpSources {
    pub fn new(config: UpstreamConfig) -> Result<HttpSources> {
        let client = Client::builder().timeout(config.fetch_timeout).build()?;

        Ok(HttpSources { client, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, base_url: &str, endpoint: UpstreamEndpoint, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", base_url, endpoint.path());

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body_text = response.text().await.unwrap_or_default();

        log::error!(
            "Upstream request failed.\nRequested-URL: <<{}>>\nQuery: <<{:?}>>\nResponse-Status-Code: <<{}>>\nResponse-Body: <<{}>>",
            url,
            query,
            status,
            body_text
        );

        Err(Error::Upstream { status: Some(status.as_u16()), message: unwrap_upstream_message(&body_text) })
    }
}

#[async_trait]
impl RampCatalogSource for HttpSources {
    async fn fetch_ramps(&self, branch_id: i64) -> Result<Vec<Ramp>> {
        let query = [
            ("branch_id", branch_id.to_string()),
            ("is_available", "true".to_string()),
            ("limit", self.config.catalog_limit.to_string()),
        ];

        let dtos: Vec<RampDto> = self.get_json(&self.config.ramp_catalog_url, UpstreamEndpoint::Ramps, &query).await?;

        Ok(dtos.into_iter().map(RampDto::into_domain).collect())
    }
}

#[async_trait]
impl ScheduleWindowSource for HttpSources {
    async fn fetch_windows(&self, ramp_id: i64, day_of_week: u8, active_only: bool) -> Result<Vec<ScheduleWindow>> {
        let query = [
            ("ramp_id", ramp_id.to_string()),
            ("day_of_week", day_of_week.to_string()),
            ("is_active", active_only.to_string()),
        ];

        let dtos: Vec<ScheduleWindowDto> = self.get_json(&self.config.schedule_url, UpstreamEndpoint::RampSchedules, &query).await?;

        // Malformed windows are dropped inside the conversion, with a warning.
        Ok(dtos.into_iter().filter_map(ScheduleWindowDto::into_domain).collect())
    }
}

#[async_trait]
impl ReservationConflictSource for HttpSources {
    async fn fetch_reservations(
        &self,
        branch_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        statuses: &[ReservationStatus],
    ) -> Result<Vec<ReservationWindow>> {
        let status_filter: Vec<&str> = statuses.iter().map(ReservationStatus::code).collect();

        let query = [
            ("branch_id", branch_id.to_string()),
            ("start_date", start.format(DATETIME_FORMAT).to_string()),
            ("end_date", end.format(DATETIME_FORMAT).to_string()),
            ("status", status_filter.join(",")),
        ];

        let dtos: Vec<ReservationDto> = self.get_json(&self.config.reservation_url, UpstreamEndpoint::Reservations, &query).await?;

        Ok(dtos.into_iter().filter_map(ReservationDto::into_domain).collect())
    }
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

/// Upstream error bodies carrying a structured `{"message": …}` field are
/// unwrapped; anything else is passed through verbatim.
fn unwrap_upstream_message(body: &str) -> String {
    match serde_json::from_str::<UpstreamErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.to_string(),
    }
}
