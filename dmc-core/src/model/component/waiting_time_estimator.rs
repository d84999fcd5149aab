use crate::model::plan::TransitRouteDescriptor;
use uom::si::f64::Time;

/// predicts how long an agent waits for a scheduled transit vehicle.
pub trait WaitingTimeEstimator: Send + Sync {
    /// never fails. when the schedule cannot answer, implementations return
    /// zero and log why.
    fn estimate_waiting_time(&self, agent_departure_time: Time, route: &TransitRouteDescriptor) -> Time;
}
