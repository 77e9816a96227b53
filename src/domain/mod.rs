pub mod cargo_filter;
pub mod coordinator;
pub mod ramp;
pub mod reservation;
pub mod resolver;
pub mod schedule_window;
pub mod slot;
pub mod slot_dedup;
pub mod slot_generator;
