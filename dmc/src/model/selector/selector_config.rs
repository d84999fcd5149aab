use super::{MaximumSelector, MultinomialLogitSelector, RandomSelector};
use dmc_core::model::{
    candidate::UtilityCandidate,
    component::{UtilitySelector, UtilitySelectorFactory},
    ModeChoiceError,
};
use serde::{Deserialize, Serialize};

/// the decision rule applied to the estimated candidates of a tour.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectorConfig {
    #[default]
    Random,
    Maximum,
    MultinomialLogit {
        #[serde(default = "default_min_utility")]
        min_utility: f64,
        #[serde(default = "default_max_utility")]
        max_utility: f64,
    },
}

fn default_min_utility() -> f64 {
    MultinomialLogitSelector::<()>::DEFAULT_MIN_UTILITY
}

fn default_max_utility() -> f64 {
    MultinomialLogitSelector::<()>::DEFAULT_MAX_UTILITY
}

impl SelectorConfig {
    /// checks the selector parameters before any selector is created.
    pub fn validate(&self) -> Result<(), ModeChoiceError> {
        match self {
            SelectorConfig::Random | SelectorConfig::Maximum => Ok(()),
            SelectorConfig::MultinomialLogit {
                min_utility,
                max_utility,
            } => {
                if !(min_utility.is_finite() && max_utility.is_finite()) {
                    return Err(ModeChoiceError::BuildError(format!(
                        "multinomial logit utility bounds must be finite, found [{min_utility}, {max_utility}]"
                    )));
                }
                if min_utility > max_utility {
                    return Err(ModeChoiceError::BuildError(format!(
                        "multinomial logit min_utility {min_utility} exceeds max_utility {max_utility}"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl<T: UtilityCandidate + 'static> UtilitySelectorFactory<T> for SelectorConfig {
    fn create_selector(&self) -> Box<dyn UtilitySelector<T>> {
        match self {
            SelectorConfig::Random => Box::new(RandomSelector::default()),
            SelectorConfig::Maximum => Box::new(MaximumSelector::default()),
            SelectorConfig::MultinomialLogit {
                min_utility,
                max_utility,
            } => Box::new(MultinomialLogitSelector::new(*min_utility, *max_utility)),
        }
    }
}
