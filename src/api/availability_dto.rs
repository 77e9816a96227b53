use chrono::NaiveDateTime;
use serde::Serialize;

use crate::api::DATETIME_FORMAT;
use crate::domain::ramp::Ramp;

/// Response element of the available-ramp lookup.
///
/// The surface echoes the requested range back alongside the resolved ramp,
/// formatted as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Serialize)]
pub struct AvailableRampDto {
    pub ramp_id: i64,
    pub ramp_name: String,
    pub branch_id: i64,
    pub is_available: bool,
    pub start_date: String,
    pub end_date: String,
}

impl AvailableRampDto {
    pub fn from_ramp(ramp: &Ramp, start: NaiveDateTime, end: NaiveDateTime) -> AvailableRampDto {
        AvailableRampDto {
            ramp_id: ramp.id,
            ramp_name: ramp.name.clone(),
            branch_id: ramp.branch_id,
            is_available: ramp.is_available,
            start_date: start.format(DATETIME_FORMAT).to_string(),
            end_date: end.format(DATETIME_FORMAT).to_string(),
        }
    }
}
