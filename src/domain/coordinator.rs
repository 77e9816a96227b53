use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use futures::future::join_all;

use crate::clock::Clock;
use crate::domain::cargo_filter::filter_by_cargo_type;
use crate::domain::ramp::{CargoType, Ramp};
use crate::domain::schedule_window::TimeRangeKey;
use crate::domain::slot::{Slot, SlotListing};
use crate::domain::{slot_dedup, slot_generator};
use crate::error::{Error, Result};
use crate::sources::{RampCatalogSource, ScheduleWindowSource};

pub const MIN_INTERVAL_MINUTES: i64 = 15;
pub const MAX_INTERVAL_MINUTES: i64 = 480;

/// The slot-listing use case: which time windows can a ramp of this branch
/// be booked in, for one cargo type on one calendar date.
///
/// Single-pass pipeline over request-scoped data; the coordinator holds no
/// state of its own and is safe to share across concurrent requests. The
/// listing is advisory: it does not consult the reservation service, so
/// `available_slots` always equals `total_slots`.
#[derive(Debug)]
pub struct AvailabilitySlotCoordinator {
    ramp_catalog: Arc<dyn RampCatalogSource>,
    schedule_source: Arc<dyn ScheduleWindowSource>,
    clock: Arc<dyn Clock>,
    fetch_timeout: Duration,
}

impl AvailabilitySlotCoordinator {
    pub fn new(
        ramp_catalog: Arc<dyn RampCatalogSource>,
        schedule_source: Arc<dyn ScheduleWindowSource>,
        clock: Arc<dyn Clock>,
        fetch_timeout: Duration,
    ) -> AvailabilitySlotCoordinator {
        AvailabilitySlotCoordinator { ramp_catalog, schedule_source, clock, fetch_timeout }
    }

    /// Lists the bookable slots of `branch_id` for `cargo_type` on `date`,
    /// cut into pieces of `interval_minutes`.
    ///
    /// Validation happens before any upstream call. The ramp catalog fetch
    /// is required; the per-ramp schedule fetches are fanned out and a
    /// single failed or slow fetch only removes that ramp's contribution.
    pub async fn get_slots(&self, branch_id: i64, cargo_type: CargoType, date: NaiveDate, interval_minutes: i64) -> Result<SlotListing> {
        if !(MIN_INTERVAL_MINUTES..=MAX_INTERVAL_MINUTES).contains(&interval_minutes) {
            return Err(Error::IntervalOutOfBounds(interval_minutes));
        }

        if date < self.clock.today() {
            return Err(Error::PastScheduleDate(date));
        }

        let ramps = self.ramp_catalog.fetch_ramps(branch_id).await?;
        let ramps: Vec<Ramp> = ramps.into_iter().filter(|ramp| ramp.is_available).collect();

        if ramps.is_empty() {
            return Err(Error::NoRampsForBranch(branch_id));
        }

        let eligible = filter_by_cargo_type(&ramps, cargo_type);

        if eligible.is_empty() {
            return Err(Error::NoRampsForCargoType { branch_id, cargo_type });
        }

        let day_of_week = date.weekday().number_from_monday() as u8;
        let window_to_ramps = self.fetch_windows_for_ramps(&eligible, day_of_week).await;

        // Zero windows for the weekday is a valid, empty result.
        let mut slots = slot_generator::generate(&window_to_ramps, interval_minutes);

        slots.sort_by_key(Slot::range_key);
        let slots = slot_dedup::dedupe(slots);

        let total_slots = slots.len();

        log::info!(
            "Listed {} slots for branch {}, cargo type {}, date {} ({} eligible ramps, {} distinct windows).",
            total_slots,
            branch_id,
            cargo_type,
            date,
            eligible.len(),
            window_to_ramps.len()
        );

        Ok(SlotListing { schedule_date: date, slots, total_slots, available_slots: total_slots })
    }

    /// Fans out one schedule fetch per eligible ramp and folds the settled
    /// results into a window → ramps map.
    ///
    /// Each fetch is bounded by the configured timeout. A failed or timed
    /// out fetch is logged and contributes no windows; it never aborts the
    /// other ramps' results.
    async fn fetch_windows_for_ramps(&self, ramps: &[Ramp], day_of_week: u8) -> HashMap<TimeRangeKey, Vec<Ramp>> {
        let fetches = ramps.iter().map(|ramp| async move {
            let outcome = tokio::time::timeout(self.fetch_timeout, self.schedule_source.fetch_windows(ramp.id, day_of_week, true)).await;
            (ramp, outcome)
        });

        let settled = join_all(fetches).await;

        let mut window_to_ramps: HashMap<TimeRangeKey, Vec<Ramp>> = HashMap::new();

        for (ramp, outcome) in settled {
            let windows = match outcome {
                Ok(Ok(windows)) => windows,
                Ok(Err(e)) => {
                    log::error!("Schedule fetch for ramp {} ('{}') failed: {}. The ramp contributes no windows.", ramp.id, ramp.name, e);
                    continue;
                }
                Err(_) => {
                    log::error!(
                        "Schedule fetch for ramp {} ('{}') timed out after {:?}. The ramp contributes no windows.",
                        ramp.id,
                        ramp.name,
                        self.fetch_timeout
                    );
                    continue;
                }
            };

            for window in windows {
                if !window.is_well_formed() {
                    log::warn!(
                        "Skipping malformed window {} - {} of ramp {} ('{}').",
                        window.start_time,
                        window.end_time,
                        ramp.id,
                        ramp.name
                    );
                    continue;
                }

                window_to_ramps.entry(window.range_key()).or_default().push(ramp.clone());
            }
        }

        return window_to_ramps;
    }
}
