use dmc_core::model::{
    component::TripRouter,
    plan::{Activity, Leg, PlanElement, Route},
    ModeChoiceError,
};
use geo::{Distance, Euclidean, Point};
use std::collections::HashMap;
use uom::si::f64::{Length, Time, Velocity};

/// travel time and distance of a teleported trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleportationPrediction {
    pub travel_time: Time,
    pub distance: Length,
}

/// how trips of one mode are teleported.
#[derive(Debug, Clone, Copy)]
pub struct TeleportationModel {
    pub speed: Velocity,
    /// ratio between network distance and straight line distance
    pub beeline_distance_factor: f64,
}

impl TeleportationModel {
    /// travel along the stretched straight line between two coordinates.
    pub fn predict(&self, origin: Point<f64>, destination: Point<f64>) -> TeleportationPrediction {
        let beeline = Length::new::<uom::si::length::meter>(Euclidean.distance(origin, destination));
        let distance = beeline * self.beeline_distance_factor;
        let travel_time: Time = distance / self.speed;
        TeleportationPrediction {
            travel_time,
            distance,
        }
    }
}

/// routes every trip as a single leg along the straight line between the
/// activity coordinates, stretched by a beeline factor and traveled at a
/// constant speed.
#[derive(Debug, Clone, Default)]
pub struct TeleportationRouter {
    modes: HashMap<String, TeleportationModel>,
}

impl TeleportationRouter {
    pub fn new(modes: HashMap<String, TeleportationModel>) -> Self {
        Self { modes }
    }

    pub fn predict(
        &self,
        origin: &Activity,
        destination: &Activity,
        mode: &str,
    ) -> Result<TeleportationPrediction, ModeChoiceError> {
        let model = self.modes.get(mode).ok_or_else(|| {
            ModeChoiceError::RoutingError(format!("no teleportation parameters for mode '{mode}'"))
        })?;
        let (Some(o), Some(d)) = (origin.coord, destination.coord) else {
            return Err(ModeChoiceError::RoutingError(format!(
                "cannot teleport '{mode}' trip from '{}' to '{}': activity has no coordinate",
                origin.location_id(),
                destination.location_id()
            )));
        };
        Ok(model.predict(o, d))
    }

    pub fn model(&self, mode: &str) -> Option<&TeleportationModel> {
        self.modes.get(mode)
    }
}

impl TripRouter for TeleportationRouter {
    fn route(
        &self,
        origin: &Activity,
        destination: &Activity,
        mode: &str,
        departure_time: Time,
    ) -> Result<Vec<PlanElement>, ModeChoiceError> {
        let prediction = self.predict(origin, destination, mode)?;
        let leg = Leg::new(mode)
            .with_departure_time(departure_time)
            .with_travel_time(prediction.travel_time)
            .with_route(Route::new(prediction.distance));
        Ok(vec![leg.into()])
    }
}
