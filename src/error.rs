use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::domain::ramp::CargoType;

/// Error taxonomy of the availability engine.
///
/// The variants fall into four categories the callers branch on:
/// validation, not-available, upstream and unexpected. Nothing in this
/// crate retries a failed call; the error is surfaced as-is.
#[derive(Debug, Error)]
pub enum Error {
    // --- VALIDATION ---
    #[error("Unknown cargo type code '{0}'. Expected one of SECO, FRIO, FLV.")]
    InvalidCargoType(String),

    #[error("Schedule date {0} lies in the past.")]
    PastScheduleDate(NaiveDate),

    #[error("Interval of {0} minutes is out of bounds. Must be between 15 and 480 minutes.")]
    IntervalOutOfBounds(i64),

    #[error("Invalid date range: start {start} must lie before end {end}.")]
    InvalidDateRange { start: NaiveDateTime, end: NaiveDateTime },

    // --- NOT AVAILABLE ---
    #[error("No available ramps found for branch {0}.")]
    NoRampsForBranch(i64),

    #[error("No ramp at branch {branch_id} is able to serve cargo type {cargo_type}.")]
    NoRampsForCargoType { branch_id: i64, cargo_type: CargoType },

    #[error("No ramp of branch {0} is free in the requested range.")]
    NoFreeRamp(i64),

    // --- UPSTREAM ---
    #[error("Upstream request failed (status: {status:?}): {message}")]
    Upstream { status: Option<u16>, message: String },

    // --- UNEXPECTED ---
    #[error("Unexpected internal error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True for malformed or out-of-range input. Never worth retrying.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidCargoType(_) | Error::PastScheduleDate(_) | Error::IntervalOutOfBounds(_) | Error::InvalidDateRange { .. }
        )
    }

    /// True when the query was well-formed but yielded no usable result.
    pub fn is_not_available(&self) -> bool {
        matches!(self, Error::NoRampsForBranch(_) | Error::NoRampsForCargoType { .. } | Error::NoFreeRamp(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Upstream { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Upstream { status: err.status().map(|s| s.as_u16()), message: err.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
