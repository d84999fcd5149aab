use super::{TeleportationModel, TeleportationRouter};
use dmc_core::model::{
    component::TripRouter,
    plan::{Activity, Leg, PlanElement, Route, TransitRouteDescriptor},
    ModeChoiceError,
};
use dmc_gtfs::schedule::{TransitSchedule, TransitStops};
use geo::{Distance, Euclidean, Point};
use std::sync::Arc;
use uom::si::f64::{Length, Time};
use uom::si::length::meter;
use uom::ConstZero;

/// one ride on a scheduled route between two stops near the trip ends.
#[derive(Debug, Clone)]
struct Connection {
    descriptor: TransitRouteDescriptor,
    access_coord: Point<f64>,
    egress_coord: Point<f64>,
    in_vehicle_time: Time,
    total_time: Time,
}

/// routes trips of the transit mode as access walk, one ride on a scheduled
/// route, egress walk. the ride minimizing walking plus in-vehicle time is
/// used, where in-vehicle time is the difference of the stop offsets. if no
/// route connects stops within reach of both ends, or walking the whole way
/// is faster, the trip is a single walk leg. all other modes are teleported.
pub struct ScheduleTransitRouter {
    transit_mode: String,
    access_mode: String,
    access_model: TeleportationModel,
    max_access_distance: Length,
    schedule: Arc<TransitSchedule>,
    stops: TransitStops,
    teleportation: TeleportationRouter,
}

impl ScheduleTransitRouter {
    pub fn new(
        transit_mode: &str,
        access_mode: &str,
        max_access_distance: Length,
        schedule: Arc<TransitSchedule>,
        stops: TransitStops,
        teleportation: TeleportationRouter,
    ) -> Result<Self, ModeChoiceError> {
        let access_model = *teleportation.model(access_mode).ok_or_else(|| {
            ModeChoiceError::BuildError(format!(
                "transit access mode '{access_mode}' has no teleportation parameters"
            ))
        })?;
        Ok(Self {
            transit_mode: transit_mode.to_string(),
            access_mode: access_mode.to_string(),
            access_model,
            max_access_distance,
            schedule,
            stops,
            teleportation,
        })
    }

    fn stops_within_reach<'a>(
        &'a self,
        stop_offsets: impl Iterator<Item = (&'a String, &'a Vec<Time>)>,
        coord: Point<f64>,
    ) -> Vec<(&'a str, Point<f64>, &'a [Time], Time)> {
        stop_offsets
            .filter_map(|(stop_id, offsets)| {
                let stop_coord = self.stops.get(stop_id)?;
                let beeline = Length::new::<meter>(Euclidean.distance(coord, stop_coord));
                if beeline > self.max_access_distance {
                    return None;
                }
                let walk = self.access_model.predict(coord, stop_coord).travel_time;
                Some((stop_id.as_str(), stop_coord, offsets.as_slice(), walk))
            })
            .collect()
    }

    fn best_connection(&self, origin: Point<f64>, destination: Point<f64>) -> Option<Connection> {
        let mut best: Option<Connection> = None;
        for (line_id, route_id, route) in self.schedule.routes() {
            let access = self.stops_within_reach(route.stop_offsets.iter(), origin);
            if access.is_empty() {
                continue;
            }
            let egress = self.stops_within_reach(route.stop_offsets.iter(), destination);
            for (access_id, access_coord, access_offsets, access_walk) in access.iter() {
                for (egress_id, egress_coord, egress_offsets, egress_walk) in egress.iter() {
                    if access_id == egress_id {
                        continue;
                    }
                    let Some(in_vehicle_time) = shortest_ride(access_offsets, egress_offsets) else {
                        continue;
                    };
                    let total_time = *access_walk + in_vehicle_time + *egress_walk;
                    if best.as_ref().is_some_and(|b| b.total_time <= total_time) {
                        continue;
                    }
                    best = Some(Connection {
                        descriptor: TransitRouteDescriptor::new(line_id, route_id, access_id, egress_id),
                        access_coord: *access_coord,
                        egress_coord: *egress_coord,
                        in_vehicle_time,
                        total_time,
                    });
                }
            }
        }
        best
    }

    fn route_transit(
        &self,
        origin: &Activity,
        destination: &Activity,
        departure_time: Time,
    ) -> Result<Vec<PlanElement>, ModeChoiceError> {
        let (Some(o), Some(d)) = (origin.coord, destination.coord) else {
            return Err(ModeChoiceError::RoutingError(format!(
                "cannot route '{}' trip from '{}' to '{}': activity has no coordinate",
                self.transit_mode,
                origin.location_id(),
                destination.location_id()
            )));
        };

        let direct = self.access_model.predict(o, d);
        let connection = self
            .best_connection(o, d)
            .filter(|c| c.total_time < direct.travel_time);
        let Some(connection) = connection else {
            let leg = self
                .walk_leg(direct.travel_time, direct.distance)
                .with_departure_time(departure_time);
            return Ok(vec![leg.into()]);
        };

        let access = self.access_model.predict(o, connection.access_coord);
        let egress = self.access_model.predict(connection.egress_coord, d);
        let ride_distance = Length::new::<meter>(Euclidean.distance(
            connection.access_coord,
            connection.egress_coord,
        ));
        let ride = Leg::new(&self.transit_mode)
            .with_routing_mode(&self.transit_mode)
            .with_travel_time(connection.in_vehicle_time)
            .with_route(Route::transit(ride_distance, connection.descriptor.clone()));

        Ok(vec![
            self.walk_leg(access.travel_time, access.distance)
                .with_departure_time(departure_time)
                .into(),
            self.stage_activity(&connection.descriptor.access_stop_id, connection.access_coord),
            ride.into(),
            self.stage_activity(&connection.descriptor.egress_stop_id, connection.egress_coord),
            self.walk_leg(egress.travel_time, egress.distance).into(),
        ])
    }

    fn walk_leg(&self, travel_time: Time, distance: Length) -> Leg {
        Leg::new(&self.access_mode)
            .with_routing_mode(&self.transit_mode)
            .with_travel_time(travel_time)
            .with_route(Route::new(distance))
    }

    fn stage_activity(&self, stop_id: &str, coord: Point<f64>) -> PlanElement {
        let activity_type = format!("{}{}", self.transit_mode, Activity::STAGE_ACTIVITY_SUFFIX);
        Activity::new(&activity_type, stop_id)
            .with_coord(coord.x(), coord.y())
            .with_max_duration(Time::ZERO)
            .into()
    }
}

/// shortest positive difference between an egress and an access offset. a
/// stop served more than once by a route has several offsets.
fn shortest_ride(access_offsets: &[Time], egress_offsets: &[Time]) -> Option<Time> {
    access_offsets
        .iter()
        .flat_map(|a| egress_offsets.iter().map(move |e| *e - *a))
        .filter(|ride| *ride > Time::ZERO)
        .reduce(|a, b| if b < a { b } else { a })
}

impl TripRouter for ScheduleTransitRouter {
    fn route(
        &self,
        origin: &Activity,
        destination: &Activity,
        mode: &str,
        departure_time: Time,
    ) -> Result<Vec<PlanElement>, ModeChoiceError> {
        if mode == self.transit_mode {
            self.route_transit(origin, destination, departure_time)
        } else {
            self.teleportation
                .route(origin, destination, mode, departure_time)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dmc_core::util::time_ops::seconds;
    use dmc_gtfs::schedule::{RouteStopRow, ScheduleLoadingPolicy, StopRow};
    use std::collections::HashMap;
    use uom::si::{f64::Velocity, time::second, velocity::meter_per_second};

    fn stop_row(stop_id: &str, x: f64) -> StopRow {
        StopRow {
            stop_id: stop_id.to_string(),
            x,
            y: 0.0,
        }
    }

    fn route_stop(route_id: &str, stop_id: &str, offset: f64) -> RouteStopRow {
        RouteStopRow {
            line_id: String::from("line"),
            route_id: route_id.to_string(),
            stop_id: stop_id.to_string(),
            departure_offset: seconds(offset),
        }
    }

    /// stops along the x axis every 2 km. "fast" serves a, b, c; "slow"
    /// serves a and c only but takes longer.
    fn router() -> ScheduleTransitRouter {
        let stops = TransitStops::from_rows(vec![
            stop_row("a", 0.0),
            stop_row("b", 2000.0),
            stop_row("c", 4000.0),
        ])
        .expect("test invariant failed");
        let schedule = TransitSchedule::from_rows(
            vec![
                route_stop("fast", "a", 0.0),
                route_stop("fast", "b", 120.0),
                route_stop("fast", "c", 240.0),
                route_stop("slow", "a", 0.0),
                route_stop("slow", "c", 900.0),
            ],
            std::iter::empty(),
            &ScheduleLoadingPolicy::All,
        )
        .expect("test invariant failed");
        let walk = TeleportationModel {
            speed: Velocity::new::<meter_per_second>(1.0),
            beeline_distance_factor: 1.0,
        };
        ScheduleTransitRouter::new(
            "pt",
            "walk",
            Length::new::<meter>(500.0),
            Arc::new(schedule),
            stops,
            TeleportationRouter::new(HashMap::from([(String::from("walk"), walk)])),
        )
        .expect("test invariant failed")
    }

    fn modes(elements: &[PlanElement]) -> Vec<String> {
        elements
            .iter()
            .map(|e| match e {
                PlanElement::Leg(leg) => leg.mode.clone(),
                PlanElement::Activity(activity) => activity.activity_type.clone(),
            })
            .collect()
    }

    #[test]
    fn test_transit_trip() {
        let origin = Activity::new("home", "h").with_coord(100.0, 0.0);
        let destination = Activity::new("work", "w").with_coord(4000.0, 200.0);
        let elements = router()
            .route(&origin, &destination, "pt", seconds(28800.0))
            .expect("test failed");
        assert_eq!(
            modes(&elements),
            vec!["walk", "pt interaction", "pt", "pt interaction", "walk"]
        );
        let ride = elements[2].as_leg().expect("test failed");
        let descriptor = ride
            .route
            .as_ref()
            .and_then(|r| r.transit.as_ref())
            .expect("test failed");
        assert_eq!(descriptor, &TransitRouteDescriptor::new("line", "fast", "a", "c"));
        assert_eq!(ride.travel_time, Some(seconds(240.0)));
        assert!((ride.distance().get::<meter>() - 4000.0).abs() < 1e-9);

        let access = elements[0].as_leg().expect("test failed");
        assert_eq!(access.departure_time, Some(seconds(28800.0)));
        assert_eq!(access.routing_mode.as_deref(), Some("pt"));
        let access_time = access.travel_time.map(|t| t.get::<second>());
        assert!((access_time.unwrap_or_default() - 100.0).abs() < 1e-9);
        assert!(elements[1].as_activity().is_some_and(Activity::is_stage_activity));
    }

    #[test]
    fn test_short_trip_walks() {
        let origin = Activity::new("home", "h").with_coord(100.0, 0.0);
        let destination = Activity::new("shop", "s").with_coord(400.0, 0.0);
        let elements = router()
            .route(&origin, &destination, "pt", seconds(0.0))
            .expect("test failed");
        assert_eq!(modes(&elements), vec!["walk"]);
        let leg = elements[0].as_leg().expect("test failed");
        assert_eq!(leg.routing_mode.as_deref(), Some("pt"));
        assert!(leg.route.as_ref().is_some_and(|r| r.transit.is_none()));
    }

    #[test]
    fn test_no_stop_in_reach_walks() {
        let origin = Activity::new("home", "h").with_coord(0.0, 3000.0);
        let destination = Activity::new("work", "w").with_coord(4000.0, 0.0);
        let elements = router()
            .route(&origin, &destination, "pt", seconds(0.0))
            .expect("test failed");
        assert_eq!(modes(&elements), vec!["walk"]);
    }

    #[test]
    fn test_other_modes_are_teleported() {
        let origin = Activity::new("home", "h").with_coord(0.0, 0.0);
        let destination = Activity::new("work", "w").with_coord(300.0, 0.0);
        let elements = router()
            .route(&origin, &destination, "walk", seconds(0.0))
            .expect("test failed");
        assert_eq!(modes(&elements), vec!["walk"]);
        assert_eq!(elements[0].as_leg().and_then(|l| l.routing_mode.clone()), None);
        assert!(router().route(&origin, &destination, "car", seconds(0.0)).is_err());
    }

    #[test]
    fn test_shortest_ride() {
        let access = [seconds(0.0), seconds(600.0)];
        let egress = [seconds(300.0), seconds(700.0)];
        assert_eq!(shortest_ride(&access, &egress), Some(seconds(100.0)));
        assert_eq!(shortest_ride(&egress[..1], &access[..1]), None);
    }

    #[test]
    fn test_missing_access_mode() {
        let result = ScheduleTransitRouter::new(
            "pt",
            "walk",
            Length::new::<meter>(500.0),
            Arc::new(TransitSchedule::default()),
            TransitStops::default(),
            TeleportationRouter::default(),
        );
        assert!(matches!(result, Err(ModeChoiceError::BuildError(_))));
    }
}
