use super::{ScheduleError, ScheduleLoadingPolicy, ScheduleWaitingTimeEstimator, ZeroWaitingTimeEstimator};
use dmc_core::model::component::WaitingTimeEstimator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleWaitingTimeConfig {
    /// CSV file with columns line_id, route_id, stop_id, departure_offset
    pub route_stops_input_file: String,
    /// CSV file with columns line_id, route_id, departure_time
    pub route_departures_input_file: String,
    /// policy by which to prune departures when reading schedules
    #[serde(default)]
    pub schedule_loading_policy: ScheduleLoadingPolicy,
}

/// selects how waiting times for scheduled transit are estimated.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WaitingTimeEstimatorConfig {
    #[default]
    Zero,
    Schedule(ScheduleWaitingTimeConfig),
}

impl WaitingTimeEstimatorConfig {
    pub fn build(&self) -> Result<Arc<dyn WaitingTimeEstimator>, ScheduleError> {
        match self {
            WaitingTimeEstimatorConfig::Zero => Ok(Arc::new(ZeroWaitingTimeEstimator)),
            WaitingTimeEstimatorConfig::Schedule(config) => {
                let estimator = ScheduleWaitingTimeEstimator::try_from(config)?;
                Ok(Arc::new(estimator))
            }
        }
    }
}
