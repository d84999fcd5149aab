use dmc_core::model::{
    candidate::TourCandidate,
    component::{TourConstraint, TourConstraintFactory},
    plan::Person,
    trip::Trip,
};

/// passes only if every inner constraint passes, evaluated in order.
pub struct CompositeTourConstraint<'a> {
    constraints: Vec<Box<dyn TourConstraint + 'a>>,
}

impl TourConstraint for CompositeTourConstraint<'_> {
    fn validate_before_estimation(&self, modes: &[String], previous_modes: &[Vec<String>]) -> bool {
        self.constraints
            .iter()
            .all(|c| c.validate_before_estimation(modes, previous_modes))
    }

    fn validate_after_estimation(
        &self,
        candidate: &TourCandidate,
        previous_candidates: &[TourCandidate],
    ) -> bool {
        self.constraints
            .iter()
            .all(|c| c.validate_after_estimation(candidate, previous_candidates))
    }
}

#[derive(Default)]
pub struct CompositeTourConstraintFactory {
    factories: Vec<Box<dyn TourConstraintFactory>>,
}

impl CompositeTourConstraintFactory {
    pub fn new(factories: Vec<Box<dyn TourConstraintFactory>>) -> Self {
        Self { factories }
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl TourConstraintFactory for CompositeTourConstraintFactory {
    fn create_constraint<'a>(
        &'a self,
        person: &Person,
        trips: &'a [Trip],
        home: Option<&'a str>,
        available_modes: &[String],
    ) -> Box<dyn TourConstraint + 'a> {
        let constraints = self
            .factories
            .iter()
            .map(|f| f.create_constraint(person, trips, home, available_modes))
            .collect();
        Box::new(CompositeTourConstraint { constraints })
    }
}
