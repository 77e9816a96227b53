use chrono::NaiveTime;
use serde::Deserialize;

use crate::api::TIME_FORMAT;
use crate::domain::schedule_window::ScheduleWindow;

/// One recurring weekly window as delivered by the schedule service.
///
/// Times arrive as `HH:MM:SS` strings. The source service validates the
/// windows on write, but the engine must not trust that: a window that does
/// not parse, or whose start does not lie before its end, is dropped with a
/// warning instead of failing the request.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleWindowDto {
    pub ramp_id: i64,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
}

impl ScheduleWindowDto {
    pub fn into_domain(self) -> Option<ScheduleWindow> {
        let start_time = parse_time(&self.start_time, self.ramp_id)?;
        let end_time = parse_time(&self.end_time, self.ramp_id)?;

        let window = ScheduleWindow { ramp_id: self.ramp_id, day_of_week: self.day_of_week, start_time, end_time, is_active: self.is_active };

        if !window.is_well_formed() {
            log::warn!(
                "Dropping malformed schedule window of ramp {}: start {} does not lie before end {}.",
                window.ramp_id,
                window.start_time,
                window.end_time
            );
            return None;
        }

        return Some(window);
    }
}

fn parse_time(raw: &str, ramp_id: i64) -> Option<NaiveTime> {
    // Some deployments serve HH:MM without seconds.
    match NaiveTime::parse_from_str(raw, TIME_FORMAT).or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M")) {
        Ok(time) => Some(time),
        Err(e) => {
            log::warn!("Dropping schedule window of ramp {}: time value '{}' does not parse ({}).", ramp_id, raw, e);
            None
        }
    }
}
