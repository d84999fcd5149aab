use super::{Activity, Leg};
use serde::{Deserialize, Serialize};

/// one entry of a plan: activities and legs alternate, with stage
/// activities allowed between the legs of a single trip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum PlanElement {
    Activity(Activity),
    Leg(Leg),
}

impl PlanElement {
    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            PlanElement::Activity(activity) => Some(activity),
            PlanElement::Leg(_) => None,
        }
    }

    pub fn as_leg(&self) -> Option<&Leg> {
        match self {
            PlanElement::Leg(leg) => Some(leg),
            PlanElement::Activity(_) => None,
        }
    }

    /// true for activities which delimit trips.
    pub fn is_main_activity(&self) -> bool {
        matches!(self, PlanElement::Activity(a) if !a.is_stage_activity())
    }
}

impl From<Activity> for PlanElement {
    fn from(value: Activity) -> Self {
        PlanElement::Activity(value)
    }
}

impl From<Leg> for PlanElement {
    fn from(value: Leg) -> Self {
        PlanElement::Leg(value)
    }
}
