use super::{CarModeAvailability, DefaultModeAvailability};
use dmc_core::model::component::ModeAvailability;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModeAvailabilityConfig {
    Default { modes: Vec<String> },
    Car { modes: Vec<String> },
}

impl ModeAvailabilityConfig {
    pub fn build(&self) -> Arc<dyn ModeAvailability> {
        match self {
            ModeAvailabilityConfig::Default { modes } => {
                Arc::new(DefaultModeAvailability::new(modes.clone()))
            }
            ModeAvailabilityConfig::Car { modes } => Arc::new(CarModeAvailability::new(modes.clone())),
        }
    }

    pub fn modes(&self) -> &[String] {
        match self {
            ModeAvailabilityConfig::Default { modes } => modes,
            ModeAvailabilityConfig::Car { modes } => modes,
        }
    }
}
