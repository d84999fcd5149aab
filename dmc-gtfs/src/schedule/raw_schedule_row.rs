use dmc_core::util::time_ops;
use serde::{Deserialize, Serialize};
use uom::si::f64::Time;

/// record type storing one stop served by a transit route and the time the
/// vehicle leaves it, relative to the departure from the first stop.
#[derive(Debug, Deserialize, Serialize)]
pub struct RouteStopRow {
    pub line_id: String,
    pub route_id: String,
    pub stop_id: String,
    #[serde(
        deserialize_with = "time_ops::deserialize_time",
        serialize_with = "time_ops::serialize_time"
    )]
    pub departure_offset: Time,
}

/// record type storing one scheduled departure of a transit route from its
/// first stop.
#[derive(Debug, Deserialize, Serialize)]
pub struct RouteDepartureRow {
    pub line_id: String,
    pub route_id: String,
    #[serde(
        deserialize_with = "time_ops::deserialize_time",
        serialize_with = "time_ops::serialize_time"
    )]
    pub departure_time: Time,
}

/// record type storing the projected coordinate of a transit stop, in the
/// same coordinate system as the activities.
#[derive(Debug, Deserialize, Serialize)]
pub struct StopRow {
    pub stop_id: String,
    pub x: f64,
    pub y: f64,
}
