use super::{
    Departure, RouteDepartureRow, RouteStopRow, Schedule, ScheduleError, ScheduleLoadingPolicy,
};
use std::{collections::HashMap, ops::Bound};
use uom::si::f64::Time;
use uom::ConstZero;

/// the stops and departures of one transit route.
#[derive(Debug, Default)]
pub struct ScheduledRoute {
    /// departure offsets per stop id. a stop may be served more than once by
    /// the same route.
    pub stop_offsets: HashMap<String, Vec<Time>>,
    pub departures: Schedule,
}

/// static transit schedule, organized as lines → routes. immutable once built.
#[derive(Debug, Default)]
pub struct TransitSchedule {
    lines: HashMap<String, HashMap<String, ScheduledRoute>>,
}

impl ScheduledRoute {
    /// shortest wait at `stop_id` for an agent arriving at `agent_departure_time`.
    /// `None` if the stop is not served or no vehicle leaves it at or after
    /// that time.
    pub fn minimal_waiting_time(&self, stop_id: &str, agent_departure_time: Time) -> Option<Time> {
        let offsets = self.stop_offsets.get(stop_id)?;
        let mut minimal: Option<Time> = None;
        for offset in offsets.iter() {
            let query = Departure::construct_query(agent_departure_time - *offset);
            let Some(next) = self.departures.lower_bound(Bound::Included(&query)) else {
                continue;
            };
            let mut wait = next.departure_time + *offset - agent_departure_time;
            if wait < Time::ZERO {
                wait = Time::ZERO;
            }
            minimal = match minimal {
                Some(current) if current <= wait => Some(current),
                _ => Some(wait),
            };
            if wait == Time::ZERO {
                break;
            }
        }
        minimal
    }
}

impl TransitSchedule {
    /// builds the schedule from its tabular form. every departure must
    /// belong to a route listed among the stops.
    pub fn from_rows(
        stops: impl IntoIterator<Item = RouteStopRow>,
        departures: impl IntoIterator<Item = RouteDepartureRow>,
        policy: &ScheduleLoadingPolicy,
    ) -> Result<TransitSchedule, ScheduleError> {
        let mut lines: HashMap<String, HashMap<String, ScheduledRoute>> = HashMap::new();
        for row in stops {
            lines
                .entry(row.line_id)
                .or_default()
                .entry(row.route_id)
                .or_default()
                .stop_offsets
                .entry(row.stop_id)
                .or_default()
                .push(row.departure_offset);
        }

        let mut n_pruned: usize = 0;
        for row in departures {
            let route = lines
                .get_mut(&row.line_id)
                .and_then(|routes| routes.get_mut(&row.route_id))
                .ok_or_else(|| {
                    ScheduleError::InvalidData(format!(
                        "departure at {} refers to line '{}', route '{}' which has no stops",
                        row.departure_time.value, row.line_id, row.route_id
                    ))
                })?;
            if !policy.insert_if_valid(&mut route.departures, Departure::new(row.departure_time)) {
                n_pruned += 1;
            }
        }
        if n_pruned > 0 {
            log::debug!("schedule loading policy pruned {n_pruned} departures");
        }

        Ok(TransitSchedule { lines })
    }

    pub fn get_route(&self, line_id: &str, route_id: &str) -> Option<&ScheduledRoute> {
        self.lines.get(line_id).and_then(|routes| routes.get(route_id))
    }

    pub fn n_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn n_routes(&self) -> usize {
        self.lines.values().map(HashMap::len).sum()
    }

    pub fn n_departures(&self) -> usize {
        self.lines
            .values()
            .flat_map(HashMap::values)
            .map(|r| r.departures.len())
            .sum()
    }

    /// every route of the schedule as (line id, route id, route).
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str, &ScheduledRoute)> + '_ {
        self.lines.iter().flat_map(|(line_id, routes)| {
            routes
                .iter()
                .map(move |(route_id, route)| (line_id.as_str(), route_id.as_str(), route))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmc_core::util::time_ops::seconds;

    fn stop(line: &str, route: &str, stop: &str, offset: f64) -> RouteStopRow {
        RouteStopRow {
            line_id: line.to_string(),
            route_id: route.to_string(),
            stop_id: stop.to_string(),
            departure_offset: seconds(offset),
        }
    }

    fn departure(line: &str, route: &str, time: f64) -> RouteDepartureRow {
        RouteDepartureRow {
            line_id: line.to_string(),
            route_id: route.to_string(),
            departure_time: seconds(time),
        }
    }

    #[test]
    fn test_from_rows() {
        let schedule = TransitSchedule::from_rows(
            vec![
                stop("l1", "r1", "a", 0.0),
                stop("l1", "r1", "b", 120.0),
                stop("l1", "r2", "b", 0.0),
                stop("l2", "r1", "c", 0.0),
            ],
            vec![
                departure("l1", "r1", 3600.0),
                departure("l1", "r1", 1800.0),
                departure("l2", "r1", 100.0),
            ],
            &ScheduleLoadingPolicy::All,
        )
        .expect("test failed");
        assert_eq!(schedule.n_lines(), 2);
        assert_eq!(schedule.n_routes(), 3);
        assert_eq!(schedule.n_departures(), 3);
        let mut route_ids = schedule
            .routes()
            .map(|(line_id, route_id, _)| format!("{line_id}/{route_id}"))
            .collect::<Vec<_>>();
        route_ids.sort();
        assert_eq!(route_ids, vec!["l1/r1", "l1/r2", "l2/r1"]);
        let route = schedule.get_route("l1", "r1").expect("test failed");
        assert_eq!(route.departures.front().map(|d| d.departure_time), Some(seconds(1800.0)));
        assert!(schedule.get_route("l1", "r9").is_none());
    }

    #[test]
    fn test_departure_of_unknown_route() {
        let result = TransitSchedule::from_rows(
            vec![stop("l1", "r1", "a", 0.0)],
            vec![departure("l1", "r2", 0.0)],
            &ScheduleLoadingPolicy::All,
        );
        assert!(matches!(result, Err(ScheduleError::InvalidData(_))));
    }

    #[test]
    fn test_minimal_waiting_time_with_repeated_stop() {
        // loop route serving stop "a" at both ends
        let schedule = TransitSchedule::from_rows(
            vec![
                stop("l", "r", "a", 0.0),
                stop("l", "r", "b", 300.0),
                stop("l", "r", "a", 600.0),
            ],
            vec![departure("l", "r", 1000.0), departure("l", "r", 2000.0)],
            &ScheduleLoadingPolicy::All,
        )
        .expect("test failed");
        let route = schedule.get_route("l", "r").expect("test failed");
        // candidates at "a": 1000, 1600, 2000, 2600
        assert_eq!(route.minimal_waiting_time("a", seconds(1100.0)), Some(seconds(500.0)));
        assert_eq!(route.minimal_waiting_time("a", seconds(1700.0)), Some(seconds(300.0)));
        assert_eq!(route.minimal_waiting_time("a", seconds(2600.0)), Some(seconds(0.0)));
        assert_eq!(route.minimal_waiting_time("a", seconds(2601.0)), None);
        assert_eq!(route.minimal_waiting_time("z", seconds(0.0)), None);
    }
}
