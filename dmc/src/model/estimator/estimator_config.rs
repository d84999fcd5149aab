use super::{SubpopulationScoringParameters, UniformScoringParameters};
use dmc_core::model::component::{ScoringParameters, ScoringParametersForPerson};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// which trips are treated as scheduled transit by the trip estimator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    /// trips of this mode pay waiting time and line switch penalties
    #[serde(default = "default_transit_mode")]
    pub transit_mode: String,
    /// leg modes aboard a scheduled vehicle
    #[serde(default = "default_pt_leg_modes")]
    pub pt_leg_modes: Vec<String>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            transit_mode: default_transit_mode(),
            pt_leg_modes: default_pt_leg_modes(),
        }
    }
}

fn default_transit_mode() -> String {
    String::from("pt")
}

fn default_pt_leg_modes() -> Vec<String> {
    vec![String::from("pt")]
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoringConfig {
    Uniform {
        parameters: ScoringParameters,
    },
    BySubpopulation {
        default: ScoringParameters,
        #[serde(default)]
        subpopulations: HashMap<String, ScoringParameters>,
    },
}

impl ScoringConfig {
    pub fn build(&self) -> Arc<dyn ScoringParametersForPerson> {
        match self {
            ScoringConfig::Uniform { parameters } => {
                Arc::new(UniformScoringParameters::new(parameters.clone()))
            }
            ScoringConfig::BySubpopulation {
                default,
                subpopulations,
            } => Arc::new(SubpopulationScoringParameters::new(
                default.clone(),
                subpopulations.clone(),
            )),
        }
    }

    /// every mode with parameters in any of the configured parameter sets.
    pub fn modes(&self) -> Vec<&str> {
        let sets: Vec<&ScoringParameters> = match self {
            ScoringConfig::Uniform { parameters } => vec![parameters],
            ScoringConfig::BySubpopulation {
                default,
                subpopulations,
            } => std::iter::once(default).chain(subpopulations.values()).collect(),
        };
        sets.iter()
            .flat_map(|p| p.mode_params.keys().map(String::as_str))
            .sorted()
            .dedup()
            .collect_vec()
    }
}
