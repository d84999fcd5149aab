use crate::model::plan::Person;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// travel utility parameters of a single mode.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ModeUtilityParameters {
    #[serde(default)]
    pub constant: f64,
    /// utility per second traveled
    #[serde(default)]
    pub marginal_utility_of_traveling: f64,
    /// utility per meter traveled
    #[serde(default)]
    pub marginal_utility_of_distance: f64,
    /// money spent per meter traveled
    #[serde(default)]
    pub monetary_distance_cost_rate: f64,
}

/// the utility function parameters that apply to one person.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ScoringParameters {
    #[serde(default)]
    pub marginal_utility_of_money: f64,
    /// utility per second spent waiting for a transit vehicle
    #[serde(default)]
    pub marginal_utility_of_waiting_pt: f64,
    /// utility of each transfer between transit vehicles
    #[serde(default)]
    pub utility_of_line_switch: f64,
    #[serde(default)]
    pub mode_params: HashMap<String, ModeUtilityParameters>,
}

impl ScoringParameters {
    pub fn mode_parameters(&self, mode: &str) -> Option<&ModeUtilityParameters> {
        self.mode_params.get(mode)
    }
}

/// looks up the [`ScoringParameters`] for a person.
pub trait ScoringParametersForPerson: Send + Sync {
    fn scoring_parameters(&self, person: &Person) -> &ScoringParameters;
}
