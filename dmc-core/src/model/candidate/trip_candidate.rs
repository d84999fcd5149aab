use super::UtilityCandidate;
use crate::model::plan::PlanElement;
use uom::si::f64::Time;

/// a trip estimated for one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TripCandidate {
    pub mode: String,
    pub utility: f64,
    /// predicted door-to-door travel time including waiting. `None` if the
    /// estimator cannot tell.
    pub duration: Option<Time>,
    /// legs and stage activities that realize the trip with this mode
    pub elements: Vec<PlanElement>,
}

impl TripCandidate {
    pub fn new(
        mode: &str,
        utility: f64,
        duration: Option<Time>,
        elements: Vec<PlanElement>,
    ) -> TripCandidate {
        TripCandidate {
            mode: mode.to_string(),
            utility,
            duration,
            elements,
        }
    }
}

impl UtilityCandidate for TripCandidate {
    fn utility(&self) -> f64 {
        self.utility
    }
}
