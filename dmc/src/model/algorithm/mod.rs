mod mode_choice_algorithm;
mod mode_choice_config;
mod tour_based_model;

pub use mode_choice_algorithm::ModeChoiceAlgorithm;
pub use mode_choice_config::{ModeChoiceConfig, ModelConfig};
pub use tour_based_model::TourBasedModel;
