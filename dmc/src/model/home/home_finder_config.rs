use super::{ActivityTypeHomeFinder, FirstActivityHomeFinder};
use dmc_core::model::component::HomeFinder;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HomeFinderConfig {
    FirstActivity,
    ActivityType {
        #[serde(default = "super::default_home_activity_type")]
        activity_type: String,
    },
}

impl Default for HomeFinderConfig {
    fn default() -> Self {
        HomeFinderConfig::ActivityType {
            activity_type: super::default_home_activity_type(),
        }
    }
}

impl HomeFinderConfig {
    pub fn build(&self) -> Arc<dyn HomeFinder> {
        match self {
            HomeFinderConfig::FirstActivity => Arc::new(FirstActivityHomeFinder),
            HomeFinderConfig::ActivityType { activity_type } => {
                Arc::new(ActivityTypeHomeFinder::new(activity_type))
            }
        }
    }
}
