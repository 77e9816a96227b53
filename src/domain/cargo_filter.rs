use crate::domain::ramp::{CargoType, Ramp};

/// Restricts a ramp catalog to the ramps able to serve one cargo type.
///
/// Eligibility is a capability attribute on the ramp itself (derived from
/// the legacy name mapping when the catalog carries none). An empty result
/// is a valid outcome, not an error; the caller decides whether it is fatal.
pub fn filter_by_cargo_type(ramps: &[Ramp], cargo_type: CargoType) -> Vec<Ramp> {
    let eligible: Vec<Ramp> = ramps.iter().filter(|ramp| ramp.can_serve(cargo_type)).cloned().collect();

    if eligible.is_empty() {
        log::warn!("None of the {} fetched ramps is able to serve cargo type {}.", ramps.len(), cargo_type);
    }

    return eligible;
}
