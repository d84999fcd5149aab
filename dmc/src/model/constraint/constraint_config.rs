use super::{
    CompositeTourConstraintFactory, ModeConstraint, VehicleTourConstraintConfig,
    VehicleTourConstraintFactory,
};
use dmc_core::model::{component::TourConstraintFactory, ModeChoiceError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::num::NonZeroU64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintConfig {
    VehicleContinuity(VehicleTourConstraintConfig),
    AllowedModes {
        allowed_modes: Vec<String>,
    },
    ModeCounts {
        mode_counts: HashMap<String, NonZeroU64>,
    },
}

impl ConstraintConfig {
    pub fn build(&self) -> Result<Box<dyn TourConstraintFactory>, ModeChoiceError> {
        match self {
            ConstraintConfig::VehicleContinuity(config) => {
                Ok(Box::new(VehicleTourConstraintFactory::from(config)))
            }
            ConstraintConfig::AllowedModes { allowed_modes } => {
                let modes = allowed_modes.iter().cloned().collect::<HashSet<_>>();
                Ok(Box::new(ModeConstraint::AllowedModes(modes)))
            }
            ConstraintConfig::ModeCounts { mode_counts } => {
                let counts = mode_counts
                    .iter()
                    .map(|(k, v)| {
                        let v_usize: usize = v.get().try_into().map_err(|e| {
                            ModeChoiceError::BuildError(format!(
                                "while reading mode count limit for '{k}': {e}"
                            ))
                        })?;
                        Ok((k.clone(), v_usize))
                    })
                    .collect::<Result<HashMap<_, _>, ModeChoiceError>>()?;
                Ok(Box::new(ModeConstraint::ModeCounts(counts)))
            }
        }
    }

    /// builds a factory applying all of the configured constraints.
    pub fn build_all(
        configs: &[ConstraintConfig],
    ) -> Result<CompositeTourConstraintFactory, ModeChoiceError> {
        let factories = configs
            .iter()
            .map(ConstraintConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CompositeTourConstraintFactory::new(factories))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::test_ops::trips_between;
    use dmc_core::model::plan::Person;

    #[test]
    fn test_deserialize_constraints() {
        let json = r#"[
            {"type": "vehicle_continuity", "require_continuity": ["car", "bike"], "require_start_at_home": ["car"]},
            {"type": "allowed_modes", "allowed_modes": ["car", "bike", "walk"]},
            {"type": "mode_counts", "mode_counts": {"bike": 1}}
        ]"#;
        let configs: Vec<ConstraintConfig> = serde_json::from_str(json).expect("test failed");
        assert_eq!(configs.len(), 3);
        let factory = ConstraintConfig::build_all(&configs).expect("test failed");
        assert_eq!(factory.len(), 3);
    }

    #[test]
    fn test_composite_requires_all() {
        let configs = vec![
            ConstraintConfig::AllowedModes {
                allowed_modes: vec![String::from("car"), String::from("walk")],
            },
            ConstraintConfig::VehicleContinuity(VehicleTourConstraintConfig {
                require_continuity: vec![String::from("car")],
                ..Default::default()
            }),
        ];
        let factory = ConstraintConfig::build_all(&configs).expect("test failed");
        let trips = trips_between(&[("home", "h"), ("work", "w"), ("shop", "s"), ("home", "h")]);
        let person = Person::new("p", vec![]);
        let constraint = factory.create_constraint(&person, &trips, Some("h"), &[]);
        let chain = |m: [&str; 3]| m.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert!(constraint.validate_before_estimation(&chain(["car", "car", "car"]), &[]));
        assert!(!constraint.validate_before_estimation(&chain(["car", "walk", "car"]), &[]));
        assert!(!constraint.validate_before_estimation(&chain(["walk", "pt", "walk"]), &[]));
    }

    #[test]
    fn test_empty_composite_accepts_everything() {
        let factory = ConstraintConfig::build_all(&[]).expect("test failed");
        assert!(factory.is_empty());
        let trips = trips_between(&[("home", "h"), ("work", "w")]);
        let constraint = factory.create_constraint(&Person::new("p", vec![]), &trips, None, &[]);
        assert!(constraint.validate_before_estimation(&[String::from("anything")], &[]));
    }
}
