use dmc_core::model::{
    candidate::TourCandidate,
    component::{TourEstimator, TripEstimator},
    plan::Person,
    trip::Trip,
    ModeChoiceError,
};
use std::sync::Arc;

/// estimates each trip of the chain in order. the tour utility is the sum of
/// the trip utilities.
pub struct CumulativeTourEstimator {
    trip_estimator: Arc<dyn TripEstimator>,
}

impl CumulativeTourEstimator {
    pub fn new(trip_estimator: Arc<dyn TripEstimator>) -> Self {
        Self { trip_estimator }
    }
}

impl TourEstimator for CumulativeTourEstimator {
    fn estimate_tour(
        &self,
        person: &Person,
        modes: &[String],
        trips: &[Trip],
        _previous_tours: &[TourCandidate],
    ) -> Result<TourCandidate, ModeChoiceError> {
        if modes.len() != trips.len() {
            return Err(ModeChoiceError::InternalError(format!(
                "mode chain of length {} does not match tour of {} trips",
                modes.len(),
                trips.len()
            )));
        }
        let mut trip_candidates = Vec::with_capacity(trips.len());
        for (mode, trip) in modes.iter().zip(trips.iter()) {
            let candidate =
                self.trip_estimator
                    .estimate_trip(person, mode, trip, &trip_candidates)?;
            trip_candidates.push(candidate);
        }
        Ok(TourCandidate::cumulative(trip_candidates))
    }
}
