use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a reservation in the reservation service.
///
/// Only `Confirmed` and `Pending` block a ramp; cancelled and completed
/// reservations free the dock again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// The statuses that occupy a ramp. Passed verbatim to the upstream
    /// range query so the service filters server-side.
    pub fn blocking() -> [ReservationStatus; 2] {
        [ReservationStatus::Confirmed, ReservationStatus::Pending]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::Completed => "COMPLETED",
        }
    }
}

/// Read-only snapshot of one reservation, used purely for conflict testing.
///
/// The upstream's own date-range filter is trusted: every reservation handed
/// to the resolver is already known to intersect the requested range, so
/// locally a ramp conflicts as soon as a reservation references its id.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationWindow {
    pub ramp_id: i64,
    pub branch_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: ReservationStatus,
}
