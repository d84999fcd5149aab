use dmc_core::model::{
    component::{ScoringParameters, ScoringParametersForPerson},
    plan::Person,
};
use std::collections::HashMap;

/// everyone is scored with the same parameters.
#[derive(Debug, Clone)]
pub struct UniformScoringParameters {
    parameters: ScoringParameters,
}

impl UniformScoringParameters {
    pub fn new(parameters: ScoringParameters) -> Self {
        Self { parameters }
    }
}

impl ScoringParametersForPerson for UniformScoringParameters {
    fn scoring_parameters(&self, _person: &Person) -> &ScoringParameters {
        &self.parameters
    }
}

/// parameters chosen by the person's subpopulation. persons without a
/// subpopulation, or with one that is not listed, use the default.
#[derive(Debug, Clone)]
pub struct SubpopulationScoringParameters {
    default: ScoringParameters,
    subpopulations: HashMap<String, ScoringParameters>,
}

impl SubpopulationScoringParameters {
    pub fn new(default: ScoringParameters, subpopulations: HashMap<String, ScoringParameters>) -> Self {
        Self {
            default,
            subpopulations,
        }
    }
}

impl ScoringParametersForPerson for SubpopulationScoringParameters {
    fn scoring_parameters(&self, person: &Person) -> &ScoringParameters {
        person
            .subpopulation
            .as_ref()
            .and_then(|s| self.subpopulations.get(s))
            .unwrap_or(&self.default)
    }
}
