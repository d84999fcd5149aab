use super::constraint_ops;
use dmc_core::model::{
    component::{TourConstraint, TourConstraintFactory},
    plan::Person,
    trip::Trip,
};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
/// constraints on the modes appearing in a chain, independent of where the
/// trips go.
pub enum ModeConstraint {
    AllowedModes(HashSet<String>),
    ModeCounts(HashMap<String, usize>),
}

impl ModeConstraint {
    pub fn valid_chain(&self, modes: &[String]) -> bool {
        match self {
            ModeConstraint::AllowedModes(items) => modes.iter().all(|m| items.contains(m)),
            ModeConstraint::ModeCounts(limits) => {
                let counts = constraint_ops::count_modes(modes);
                constraint_ops::valid_mode_counts(&counts, limits)
            }
        }
    }
}

impl TourConstraint for ModeConstraint {
    fn validate_before_estimation(&self, modes: &[String], _previous_modes: &[Vec<String>]) -> bool {
        self.valid_chain(modes)
    }
}

impl TourConstraintFactory for ModeConstraint {
    fn create_constraint<'a>(
        &'a self,
        _person: &Person,
        _trips: &'a [Trip],
        _home: Option<&'a str>,
        _available_modes: &[String],
    ) -> Box<dyn TourConstraint + 'a> {
        Box::new(self)
    }
}
