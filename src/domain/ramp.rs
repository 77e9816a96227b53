use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Classification of the goods a reservation moves through a ramp.
///
/// The set is closed; the wire codes are the legacy Portuguese ones
/// (`SECO`, `FRIO`, `FLV`). Unknown codes are rejected at the boundary,
/// before any upstream fetch happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CargoType {
    /// Dry goods (`SECO`).
    Dry,
    /// Refrigerated goods (`FRIO`).
    Cold,
    /// Fruits, vegetables and other perishables (`FLV`).
    Perishable,
}

impl CargoType {
    /// The wire code used by the HTTP surface and the upstream services.
    pub fn code(&self) -> &'static str {
        match self {
            CargoType::Dry => "SECO",
            CargoType::Cold => "FRIO",
            CargoType::Perishable => "FLV",
        }
    }

    /// Legacy capability mapping keyed by the ramp display name.
    ///
    /// The original system hard-coded which ramps may serve a cargo type by
    /// matching on the names "Rampa 1/2/3". The mapping survives here as the
    /// default capability set for catalogs that do not carry an explicit
    /// capability attribute, so the externally observable behavior stays the
    /// same: FRIO is served only by "Rampa 1", SECO by "Rampa 2"/"Rampa 3",
    /// FLV by "Rampa 1"/"Rampa 2".
    pub fn default_for_name(ramp_name: &str) -> HashSet<CargoType> {
        match ramp_name.trim() {
            "Rampa 1" | "Ramp 1" => HashSet::from([CargoType::Cold, CargoType::Perishable]),
            "Rampa 2" | "Ramp 2" => HashSet::from([CargoType::Dry, CargoType::Perishable]),
            "Rampa 3" | "Ramp 3" => HashSet::from([CargoType::Dry]),
            _ => HashSet::new(),
        }
    }
}

impl FromStr for CargoType {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_uppercase().as_str() {
            "SECO" => Ok(CargoType::Dry),
            "FRIO" => Ok(CargoType::Cold),
            "FLV" => Ok(CargoType::Perishable),
            other => Err(Error::InvalidCargoType(other.to_string())),
        }
    }
}

impl fmt::Display for CargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A physical loading dock at a branch, as fetched from the branch catalog.
///
/// The engine treats the ramp as an immutable snapshot for the duration of
/// one request. `capabilities` holds the cargo types this ramp may serve;
/// when the catalog payload carries no explicit capability set it is derived
/// from the ramp name via [`CargoType::default_for_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    pub id: i64,
    pub name: String,
    pub branch_id: i64,
    pub is_available: bool,
    pub capabilities: HashSet<CargoType>,
}

impl Ramp {
    pub fn can_serve(&self, cargo_type: CargoType) -> bool {
        self.capabilities.contains(&cargo_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cargo_type_codes_round_trip() {
        for cargo_type in [CargoType::Dry, CargoType::Cold, CargoType::Perishable] {
            assert_eq!(cargo_type.code().parse::<CargoType>().unwrap(), cargo_type);
        }
    }

    #[test]
    fn cargo_type_parse_is_case_insensitive() {
        assert_eq!("frio".parse::<CargoType>().unwrap(), CargoType::Cold);
        assert_eq!(" seco ".parse::<CargoType>().unwrap(), CargoType::Dry);
    }

    #[test]
    fn unknown_cargo_code_is_a_validation_error() {
        let err = "CONGELADO".parse::<CargoType>().unwrap_err();
        assert!(err.is_validation(), "Unknown cargo codes must be rejected as validation errors");
    }

    #[test]
    fn legacy_name_mapping_matches_the_original_policy() {
        assert!(CargoType::default_for_name("Rampa 1").contains(&CargoType::Cold));
        assert!(CargoType::default_for_name("Rampa 1").contains(&CargoType::Perishable));
        assert!(!CargoType::default_for_name("Rampa 1").contains(&CargoType::Dry));

        assert!(CargoType::default_for_name("Rampa 2").contains(&CargoType::Dry));
        assert!(CargoType::default_for_name("Rampa 2").contains(&CargoType::Perishable));

        assert_eq!(CargoType::default_for_name("Rampa 3"), HashSet::from([CargoType::Dry]));
        assert!(CargoType::default_for_name("Doca Norte").is_empty());
    }
}
