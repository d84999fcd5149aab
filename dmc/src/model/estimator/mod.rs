mod cumulative_tour_estimator;
mod estimator_config;
pub mod estimator_ops;
mod scoring_parameters_lookup;
mod scoring_trip_estimator;

pub use cumulative_tour_estimator::CumulativeTourEstimator;
pub use estimator_config::{EstimatorConfig, ScoringConfig};
pub use scoring_parameters_lookup::{SubpopulationScoringParameters, UniformScoringParameters};
pub use scoring_trip_estimator::ScoringTripEstimator;
