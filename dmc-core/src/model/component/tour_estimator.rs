use crate::model::{candidate::TourCandidate, plan::Person, trip::Trip, ModeChoiceError};

/// estimates a whole mode chain for a tour.
pub trait TourEstimator: Send + Sync {
    /// `previous_tours` holds the chosen candidates of the person's earlier
    /// tours.
    fn estimate_tour(
        &self,
        person: &Person,
        modes: &[String],
        trips: &[Trip],
        previous_tours: &[TourCandidate],
    ) -> Result<TourCandidate, ModeChoiceError>;
}
