use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;

use crate::domain::ramp::Ramp;
use crate::domain::reservation::ReservationStatus;
use crate::error::{Error, Result};
use crate::sources::{RampCatalogSource, ReservationConflictSource};

/// The free-ramp use case: one ramp of the branch with no active
/// reservation inside an arbitrary date range.
///
/// The catalog and the reservation list are fetched concurrently; both
/// fetches are required. Locally a ramp conflicts as soon as any fetched
/// reservation references its id; the upstream's own range filter is
/// trusted, no interval arithmetic happens here. The first surviving ramp
/// in catalog order is returned, without any ranking or load balancing.
#[derive(Debug)]
pub struct AvailableRampResolver {
    ramp_catalog: Arc<dyn RampCatalogSource>,
    reservation_source: Arc<dyn ReservationConflictSource>,
    fetch_timeout: Duration,
}

impl AvailableRampResolver {
    pub fn new(
        ramp_catalog: Arc<dyn RampCatalogSource>,
        reservation_source: Arc<dyn ReservationConflictSource>,
        fetch_timeout: Duration,
    ) -> AvailableRampResolver {
        AvailableRampResolver { ramp_catalog, reservation_source, fetch_timeout }
    }

    pub async fn find_free_ramp(&self, branch_id: i64, start: NaiveDateTime, end: NaiveDateTime) -> Result<Ramp> {
        if start >= end {
            return Err(Error::InvalidDateRange { start, end });
        }

        // Join point: both fetches must settle before the resolver proceeds.
        let blocking_statuses = ReservationStatus::blocking();
        let (ramps_outcome, reservations_outcome) = tokio::join!(
            tokio::time::timeout(self.fetch_timeout, self.ramp_catalog.fetch_ramps(branch_id)),
            tokio::time::timeout(
                self.fetch_timeout,
                self.reservation_source.fetch_reservations(branch_id, start, end, &blocking_statuses)
            ),
        );

        let ramps = unwrap_fetch(ramps_outcome, "ramp catalog", self.fetch_timeout)?;
        let reservations = unwrap_fetch(reservations_outcome, "reservation list", self.fetch_timeout)?;

        let busy_ramp_ids: HashSet<i64> = reservations.iter().map(|reservation| reservation.ramp_id).collect();

        // An empty catalog and an all-conflicting catalog surface the same
        // condition; the caller cannot tell the two causes apart.
        let free_ramp = ramps.into_iter().filter(|ramp| ramp.is_available).find(|ramp| !busy_ramp_ids.contains(&ramp.id));

        match free_ramp {
            Some(ramp) => {
                log::info!(
                    "Resolved free ramp {} ('{}') for branch {} between {} and {} ({} blocking reservations considered).",
                    ramp.id,
                    ramp.name,
                    branch_id,
                    start,
                    end,
                    busy_ramp_ids.len()
                );
                Ok(ramp)
            }
            None => Err(Error::NoFreeRamp(branch_id)),
        }
    }
}

fn unwrap_fetch<T>(outcome: std::result::Result<Result<T>, tokio::time::error::Elapsed>, what: &str, timeout: Duration) -> Result<T> {
    match outcome {
        Ok(result) => result,
        Err(_) => Err(Error::Upstream { status: None, message: format!("Fetch of the {} timed out after {:?}.", what, timeout) }),
    }
}
