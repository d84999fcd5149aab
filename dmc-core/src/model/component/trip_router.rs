use crate::model::{
    plan::{Activity, PlanElement},
    ModeChoiceError,
};
use uom::si::f64::Time;

/// materializes the legs and stage activities of a trip for a mode.
pub trait TripRouter: Send + Sync {
    fn route(
        &self,
        origin: &Activity,
        destination: &Activity,
        mode: &str,
        departure_time: Time,
    ) -> Result<Vec<PlanElement>, ModeChoiceError>;
}
