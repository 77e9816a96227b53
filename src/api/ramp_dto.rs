use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::ramp::{CargoType, Ramp};

/// One ramp as delivered by the branch catalog service.
///
/// `cargo_types` is optional: older catalog deployments do not carry the
/// capability attribute yet, in which case the legacy name mapping applies.
#[derive(Debug, Clone, Deserialize)]
pub struct RampDto {
    pub id: i64,
    pub name: String,
    pub branch_id: i64,
    pub is_available: bool,
    #[serde(default)]
    pub cargo_types: Option<Vec<String>>,
}

impl RampDto {
    pub fn into_domain(self) -> Ramp {
        let capabilities = match &self.cargo_types {
            Some(codes) => {
                let mut parsed: HashSet<CargoType> = HashSet::new();
                for code in codes {
                    match code.parse::<CargoType>() {
                        Ok(cargo_type) => {
                            parsed.insert(cargo_type);
                        }
                        Err(_) => {
                            log::warn!("Ramp {} ('{}') advertises unknown cargo type code '{}'. Ignoring it.", self.id, self.name, code);
                        }
                    }
                }
                parsed
            }
            None => CargoType::default_for_name(&self.name),
        };

        Ramp { id: self.id, name: self.name, branch_id: self.branch_id, is_available: self.is_available, capabilities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cargo_types_fall_back_to_the_name_mapping() {
        let dto = RampDto { id: 1, name: "Rampa 1".to_string(), branch_id: 4, is_available: true, cargo_types: None };

        let ramp = dto.into_domain();

        assert!(ramp.can_serve(CargoType::Cold));
        assert!(!ramp.can_serve(CargoType::Dry));
    }

    #[test]
    fn explicit_cargo_types_are_parsed_and_unknown_codes_ignored() {
        let dto = RampDto {
            id: 2,
            name: "Doca Sul".to_string(),
            branch_id: 4,
            is_available: true,
            cargo_types: Some(vec!["SECO".to_string(), "GRANEL".to_string()]),
        };

        let ramp = dto.into_domain();

        assert!(ramp.can_serve(CargoType::Dry));
        assert_eq!(ramp.capabilities.len(), 1);
    }
}
