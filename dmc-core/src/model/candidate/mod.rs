mod tour_candidate;
mod trip_candidate;
mod utility_candidate;

pub use tour_candidate::TourCandidate;
pub use trip_candidate::TripCandidate;
pub use utility_candidate::UtilityCandidate;
