use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::ramp::Ramp;
use crate::domain::reservation::{ReservationStatus, ReservationWindow};
use crate::domain::schedule_window::ScheduleWindow;
use crate::error::Result;

pub mod endpoint;
pub mod http;
pub mod mock;

/// Read access to the ramp catalog of a branch.
///
/// Implementations are stateless and reentrant; one instance is shared
/// across all concurrent requests.
#[async_trait]
pub trait RampCatalogSource: std::fmt::Debug + Send + Sync {
    /// Fetches the available ramps belonging to `branch_id`.
    async fn fetch_ramps(&self, branch_id: i64) -> Result<Vec<Ramp>>;
}

/// Read access to the recurring weekly schedule windows of a ramp.
#[async_trait]
pub trait ScheduleWindowSource: std::fmt::Debug + Send + Sync {
    /// Fetches the windows of one ramp for one day of the week (1–7,
    /// Monday = 1). Calls for different ramps are independent and
    /// side-effect-free; the coordinator fans them out concurrently.
    async fn fetch_windows(&self, ramp_id: i64, day_of_week: u8, active_only: bool) -> Result<Vec<ScheduleWindow>>;
}

/// Read access to the reservations of a branch inside a date range.
#[async_trait]
pub trait ReservationConflictSource: std::fmt::Debug + Send + Sync {
    /// Fetches the reservations of `branch_id` intersecting the range,
    /// restricted to the given statuses. The range filtering is done by the
    /// upstream service; the result is only used for conflict testing.
    async fn fetch_reservations(
        &self,
        branch_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        statuses: &[ReservationStatus],
    ) -> Result<Vec<ReservationWindow>>;
}
