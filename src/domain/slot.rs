use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::domain::schedule_window::TimeRangeKey;

/// A discrete, fixed-length bookable interval derived from a schedule window.
///
/// Slots are produced fresh for every request and never persisted. The span
/// of a slot is always exactly the requested interval length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    #[serde(serialize_with = "serialize_hhmm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_hhmm")]
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub ramp_id: i64,
    pub ramp_name: String,
}

impl Slot {
    pub fn range_key(&self) -> TimeRangeKey {
        TimeRangeKey { start_time: self.start_time, end_time: self.end_time }
    }
}

/// The result of one slot-listing request.
///
/// `available_slots` always equals `total_slots`: the listing is advisory
/// only and does not consult the reservation service for conflicts. Conflict
/// checking happens on the single-ramp resolution path instead.
#[derive(Debug, Clone, Serialize)]
pub struct SlotListing {
    pub schedule_date: NaiveDate,
    pub slots: Vec<Slot>,
    pub total_slots: usize,
    pub available_slots: usize,
}

fn serialize_hhmm<S: serde::Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format("%H:%M").to_string())
}
