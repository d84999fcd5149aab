use crate::model::plan::{Activity, Leg, PlanElement};
use uom::si::f64::Time;

/// one origin-to-destination movement of a person, extracted from the plan
/// before mode choice.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub origin_activity: Activity,
    pub destination_activity: Activity,
    /// the mode recorded in the plan before mode choice
    pub routing_mode: String,
    /// legs and stage activities between origin and destination, never empty
    pub elements: Vec<PlanElement>,
    pub departure_time: Time,
    /// [`crate::model::plan::Person::stable_hash`] of the owning person
    pub person_hash: u64,
    /// zero-based position of the trip in the plan
    pub index: usize,
}

impl Trip {
    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.elements.iter().filter_map(PlanElement::as_leg)
    }
}
