use super::{ActivityTourFinder, PlanTourFinder};
use dmc_core::model::component::TourFinder;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TourFinderConfig {
    /// the whole plan is one tour
    #[default]
    Plan,
    /// tours end at every arrival at an activity of this type
    Activity {
        #[serde(default = "crate::model::home::default_home_activity_type")]
        activity_type: String,
    },
}

impl TourFinderConfig {
    pub fn build(&self) -> Arc<dyn TourFinder> {
        match self {
            TourFinderConfig::Plan => Arc::new(PlanTourFinder),
            TourFinderConfig::Activity { activity_type } => {
                Arc::new(ActivityTourFinder::new(activity_type))
            }
        }
    }
}
