use super::{schedule_ops, ScheduleError, ScheduleWaitingTimeConfig, TransitSchedule};
use dmc_core::{
    model::{component::WaitingTimeEstimator, plan::TransitRouteDescriptor},
    util::time_ops,
};
use std::{path::Path, sync::Arc};
use uom::si::f64::Time;
use uom::ConstZero;

/// estimates the wait at the access stop of a transit leg as the time until
/// the next scheduled vehicle of the leg's route leaves that stop.
pub struct ScheduleWaitingTimeEstimator {
    schedule: Arc<TransitSchedule>,
}

impl ScheduleWaitingTimeEstimator {
    pub fn new(schedule: Arc<TransitSchedule>) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &TransitSchedule {
        &self.schedule
    }
}

impl WaitingTimeEstimator for ScheduleWaitingTimeEstimator {
    fn estimate_waiting_time(&self, agent_departure_time: Time, route: &TransitRouteDescriptor) -> Time {
        let waiting_time = self
            .schedule
            .get_route(&route.line_id, &route.route_id)
            .and_then(|r| r.minimal_waiting_time(&route.access_stop_id, agent_departure_time));
        match waiting_time {
            Some(waiting_time) => waiting_time,
            None => {
                log::warn!(
                    "unable to find waiting time for departure on line {}, route {}, at stop {}, after {}. falling back to 0s",
                    route.line_id,
                    route.route_id,
                    route.access_stop_id,
                    time_ops::format_time(&agent_departure_time)
                );
                Time::ZERO
            }
        }
    }
}

impl TryFrom<&ScheduleWaitingTimeConfig> for ScheduleWaitingTimeEstimator {
    type Error = ScheduleError;

    fn try_from(value: &ScheduleWaitingTimeConfig) -> Result<Self, Self::Error> {
        log::debug!(
            "loading transit schedule from {} and {}",
            value.route_stops_input_file,
            value.route_departures_input_file
        );
        let stops = schedule_ops::read_csv_rows(Path::new(&value.route_stops_input_file))?;
        log::debug!(
            "{} - loaded {} route stop rows",
            value.route_stops_input_file,
            stops.len()
        );
        let departures =
            schedule_ops::read_csv_rows(Path::new(&value.route_departures_input_file))?;
        log::debug!(
            "{} - loaded {} departure rows",
            value.route_departures_input_file,
            departures.len()
        );

        let schedule =
            TransitSchedule::from_rows(stops, departures, &value.schedule_loading_policy)?;
        log::debug!(
            "built schedule lookup for {} lines, {} routes, {} departures",
            schedule.n_lines(),
            schedule.n_routes(),
            schedule.n_departures()
        );
        Ok(Self::new(Arc::new(schedule)))
    }
}
