use crate::util::time_ops;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time};

/// a movement between two activities with a single mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Leg {
    pub mode: String,
    /// the main mode of the trip this leg belongs to, when the leg itself is
    /// only a part of it (access walk of a transit trip, for example).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_mode: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "time_ops::deserialize_optional_time",
        serialize_with = "time_ops::serialize_optional_time"
    )]
    pub departure_time: Option<Time>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "time_ops::deserialize_optional_time",
        serialize_with = "time_ops::serialize_optional_time"
    )]
    pub travel_time: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
}

/// the materialized path of a leg.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    /// network distance in meters
    pub distance: Length,
    /// set on legs aboard a scheduled transit vehicle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit: Option<TransitRouteDescriptor>,
}

/// identifies the scheduled service used by a transit leg and where it is
/// boarded and left.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitRouteDescriptor {
    pub line_id: String,
    pub route_id: String,
    pub access_stop_id: String,
    pub egress_stop_id: String,
}

impl Leg {
    pub fn new(mode: &str) -> Leg {
        Leg {
            mode: mode.to_string(),
            routing_mode: None,
            departure_time: None,
            travel_time: None,
            route: None,
        }
    }

    pub fn with_departure_time(mut self, departure_time: Time) -> Leg {
        self.departure_time = Some(departure_time);
        self
    }

    pub fn with_travel_time(mut self, travel_time: Time) -> Leg {
        self.travel_time = Some(travel_time);
        self
    }

    pub fn with_route(mut self, route: Route) -> Leg {
        self.route = Some(route);
        self
    }

    pub fn with_routing_mode(mut self, routing_mode: &str) -> Leg {
        self.routing_mode = Some(routing_mode.to_string());
        self
    }

    /// network distance of the leg, zero if the leg has not been routed.
    pub fn distance(&self) -> Length {
        self.route
            .as_ref()
            .map(|r| r.distance)
            .unwrap_or_else(|| Length::new::<uom::si::length::meter>(0.0))
    }
}

impl Route {
    pub fn new(distance: Length) -> Route {
        Route {
            distance,
            transit: None,
        }
    }

    pub fn transit(distance: Length, descriptor: TransitRouteDescriptor) -> Route {
        Route {
            distance,
            transit: Some(descriptor),
        }
    }
}

impl TransitRouteDescriptor {
    pub fn new(
        line_id: &str,
        route_id: &str,
        access_stop_id: &str,
        egress_stop_id: &str,
    ) -> TransitRouteDescriptor {
        TransitRouteDescriptor {
            line_id: line_id.to_string(),
            route_id: route_id.to_string(),
            access_stop_id: access_stop_id.to_string(),
            egress_stop_id: egress_stop_id.to_string(),
        }
    }
}
