use chrono::NaiveTime;

/// A recurring weekly open interval of one ramp.
///
/// `day_of_week` follows the upstream convention 1–7 with Monday = 1.
/// The source service validates `start_time < end_time`; the engine does not
/// re-validate but skips malformed windows defensively (see the generator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub ramp_id: i64,
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
}

impl ScheduleWindow {
    pub fn range_key(&self) -> TimeRangeKey {
        TimeRangeKey { start_time: self.start_time, end_time: self.end_time }
    }

    /// A window is malformed when it is empty or inverted. Such windows are
    /// skipped with a warning instead of aborting the request.
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }
}

/// Composite key identifying one open interval of the day.
///
/// Several ramps can share the identical window; grouping by this key is
/// what lets the pipeline present one bookable option per distinct range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeRangeKey {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
