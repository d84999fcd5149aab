mod home_finder;
mod mode_availability;
mod mode_chain_generator;
mod scoring_parameters;
mod tour_constraint;
mod tour_estimator;
mod tour_finder;
mod trip_estimator;
mod trip_router;
mod utility_selector;
mod waiting_time_estimator;

pub use home_finder::HomeFinder;
pub use mode_availability::ModeAvailability;
pub use mode_chain_generator::{ModeChainGenerator, ModeChainGeneratorFactory};
pub use scoring_parameters::{ModeUtilityParameters, ScoringParameters, ScoringParametersForPerson};
pub use tour_constraint::{TourConstraint, TourConstraintFactory};
pub use tour_estimator::TourEstimator;
pub use tour_finder::TourFinder;
pub use trip_estimator::TripEstimator;
pub use trip_router::TripRouter;
pub use utility_selector::{UtilitySelector, UtilitySelectorFactory};
pub use waiting_time_estimator::WaitingTimeEstimator;
