use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::api::DATETIME_FORMAT;
use crate::domain::reservation::{ReservationStatus, ReservationWindow};

/// One reservation as delivered by the reservation service range query.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationDto {
    pub ramp_id: i64,
    pub branch_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: ReservationStatus,
}

impl ReservationDto {
    pub fn into_domain(self) -> Option<ReservationWindow> {
        let start_time = parse_datetime(&self.start_date, self.ramp_id)?;
        let end_time = parse_datetime(&self.end_date, self.ramp_id)?;

        Some(ReservationWindow { ramp_id: self.ramp_id, branch_id: self.branch_id, start_time, end_time, status: self.status })
    }
}

fn parse_datetime(raw: &str, ramp_id: i64) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Dropping reservation of ramp {}: date value '{}' does not parse ({}).", ramp_id, raw, e);
            None
        }
    }
}
