#[derive(Debug)]
pub enum UpstreamEndpoint {
    Ramps,
    RampSchedules,
    Reservations,
}

impl UpstreamEndpoint {
    pub fn path(&self) -> &str {
        match self {
            Self::Ramps => "/ramps",
            Self::RampSchedules => "/ramp-schedules",
            Self::Reservations => "/reservations",
        }
    }
}
