pub mod availability_dto;
pub mod ramp_dto;
pub mod reservation_dto;
pub mod schedule_dto;

/// Wire format for date-time values on the reservation surface.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire format for the time-of-day values of schedule windows.
pub const TIME_FORMAT: &str = "%H:%M:%S";
