use chrono::{Local, NaiveDate};

/// Source of "today" for the past-date validation.
///
/// The availability pipeline never reads wall time directly. Injecting the
/// clock keeps the coordinator a pure function of its inputs and makes the
/// past-date rule testable without touching the system time.
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the local system time.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date. Used by the tests.
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> FixedClock {
        FixedClock { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
