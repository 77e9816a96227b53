use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::ramp::Ramp;
use crate::domain::reservation::{ReservationStatus, ReservationWindow};
use crate::domain::schedule_window::ScheduleWindow;
use crate::error::{Error, Result};
use crate::sources::{RampCatalogSource, ReservationConflictSource, ScheduleWindowSource};

// In-tree mocks for the three collaborator sources. Used by the tests.

#[derive(Debug, Default)]
pub struct MockRampCatalog {
    pub ramps: Vec<Ramp>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl MockRampCatalog {
    pub fn with_ramps(ramps: Vec<Ramp>) -> MockRampCatalog {
        MockRampCatalog { ramps, fail: false, calls: AtomicUsize::new(0) }
    }

    pub fn failing() -> MockRampCatalog {
        MockRampCatalog { ramps: Vec::new(), fail: true, calls: AtomicUsize::new(0) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RampCatalogSource for MockRampCatalog {
    async fn fetch_ramps(&self, branch_id: i64) -> Result<Vec<Ramp>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(Error::Upstream { status: Some(503), message: "ramp catalog unavailable".to_string() });
        }

        Ok(self.ramps.iter().filter(|ramp| ramp.branch_id == branch_id).cloned().collect())
    }
}

#[derive(Debug, Default)]
pub struct MockScheduleSource {
    /// Windows keyed by ramp id. A fetch returns the windows matching the
    /// requested day of week.
    pub windows: HashMap<i64, Vec<ScheduleWindow>>,
    /// Ramp ids whose fetch fails, for the partial-success tests.
    pub failing_ramps: HashSet<i64>,
    pub calls: AtomicUsize,
}

impl MockScheduleSource {
    pub fn with_windows(windows: HashMap<i64, Vec<ScheduleWindow>>) -> MockScheduleSource {
        MockScheduleSource { windows, failing_ramps: HashSet::new(), calls: AtomicUsize::new(0) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScheduleWindowSource for MockScheduleSource {
    async fn fetch_windows(&self, ramp_id: i64, day_of_week: u8, active_only: bool) -> Result<Vec<ScheduleWindow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_ramps.contains(&ramp_id) {
            return Err(Error::Upstream { status: Some(500), message: format!("schedule fetch for ramp {} failed", ramp_id) });
        }

        let windows = self
            .windows
            .get(&ramp_id)
            .map(|all| {
                all.iter()
                    .filter(|window| window.day_of_week == day_of_week && (!active_only || window.is_active))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(windows)
    }
}

#[derive(Debug, Default)]
pub struct MockReservationSource {
    pub reservations: Vec<ReservationWindow>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl MockReservationSource {
    pub fn with_reservations(reservations: Vec<ReservationWindow>) -> MockReservationSource {
        MockReservationSource { reservations, fail: false, calls: AtomicUsize::new(0) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReservationConflictSource for MockReservationSource {
    async fn fetch_reservations(
        &self,
        branch_id: i64,
        _start: NaiveDateTime,
        _end: NaiveDateTime,
        statuses: &[ReservationStatus],
    ) -> Result<Vec<ReservationWindow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(Error::Upstream { status: Some(503), message: "reservation service unavailable".to_string() });
        }

        // The real service filters by range server-side; the mock hands back
        // everything for the branch matching the status filter.
        Ok(self
            .reservations
            .iter()
            .filter(|reservation| reservation.branch_id == branch_id && statuses.contains(&reservation.status))
            .cloned()
            .collect())
    }
}
