use super::{Departure, Schedule};
use dmc_core::util::time_ops;
use serde::{Deserialize, Serialize};
use uom::si::f64::Time;

/// policy by which to prune departures when reading schedules.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleLoadingPolicy {
    #[default]
    All,
    /// keeps departures within `[start, end]`
    InTimeRange {
        #[serde(
            deserialize_with = "time_ops::deserialize_time",
            serialize_with = "time_ops::serialize_time"
        )]
        start: Time,
        #[serde(
            deserialize_with = "time_ops::deserialize_time",
            serialize_with = "time_ops::serialize_time"
        )]
        end: Time,
    },
}

impl ScheduleLoadingPolicy {
    /// inserts the departure if the policy accepts it. returns whether it was
    /// inserted.
    pub fn insert_if_valid(&self, schedule: &mut Schedule, element: Departure) -> bool {
        let should_insert = match self {
            ScheduleLoadingPolicy::All => true,
            ScheduleLoadingPolicy::InTimeRange { start, end } => {
                (element.departure_time <= *end) && (*start <= element.departure_time)
            }
        };

        if should_insert {
            schedule.insert(element);
        }
        should_insert
    }
}
