use crate::model::{candidate::TripCandidate, plan::Person, trip::Trip, ModeChoiceError};

/// scores a single trip performed with a given mode.
pub trait TripEstimator: Send + Sync {
    /// `previous_trips` holds the candidates already estimated for the
    /// preceding trips of the same chain.
    ///
    /// # Errors
    ///
    /// [`ModeChoiceError::MissingScoringParameters`] if the mode has no
    /// utility parameters, or routing failures.
    fn estimate_trip(
        &self,
        person: &Person,
        mode: &str,
        trip: &Trip,
        previous_trips: &[TripCandidate],
    ) -> Result<TripCandidate, ModeChoiceError>;
}
