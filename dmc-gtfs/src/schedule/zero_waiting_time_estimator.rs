use dmc_core::model::{component::WaitingTimeEstimator, plan::TransitRouteDescriptor};
use uom::si::f64::Time;
use uom::ConstZero;

/// waiting time estimator for setups without schedule data.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroWaitingTimeEstimator;

impl WaitingTimeEstimator for ZeroWaitingTimeEstimator {
    fn estimate_waiting_time(&self, _agent_departure_time: Time, _route: &TransitRouteDescriptor) -> Time {
        Time::ZERO
    }
}
