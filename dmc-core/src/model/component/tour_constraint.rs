use crate::model::{candidate::TourCandidate, plan::Person, trip::Trip};

/// a rule over the mode chain of one tour. created per tour by a
/// [`TourConstraintFactory`] and discarded afterwards.
pub trait TourConstraint {
    /// checks a mode chain before any of its trips are estimated.
    /// `previous_modes` holds the chosen chains of the person's earlier tours.
    fn validate_before_estimation(&self, modes: &[String], previous_modes: &[Vec<String>]) -> bool;

    /// checks an estimated candidate. `previous_candidates` holds the
    /// candidates of this tour that passed so far.
    fn validate_after_estimation(
        &self,
        _candidate: &TourCandidate,
        _previous_candidates: &[TourCandidate],
    ) -> bool {
        true
    }
}

impl<T: TourConstraint + ?Sized> TourConstraint for &T {
    fn validate_before_estimation(&self, modes: &[String], previous_modes: &[Vec<String>]) -> bool {
        (**self).validate_before_estimation(modes, previous_modes)
    }

    fn validate_after_estimation(
        &self,
        candidate: &TourCandidate,
        previous_candidates: &[TourCandidate],
    ) -> bool {
        (**self).validate_after_estimation(candidate, previous_candidates)
    }
}

/// builds the [`TourConstraint`] of a tour.
pub trait TourConstraintFactory: Send + Sync {
    /// `home` is the location id of the person's home, if it is known.
    fn create_constraint<'a>(
        &'a self,
        person: &Person,
        trips: &'a [Trip],
        home: Option<&'a str>,
        available_modes: &[String],
    ) -> Box<dyn TourConstraint + 'a>;
}
