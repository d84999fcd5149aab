use super::{ModeChoiceAlgorithm, TourBasedModel};
use crate::model::{
    availability::ModeAvailabilityConfig,
    constraint::ConstraintConfig,
    estimator::{CumulativeTourEstimator, EstimatorConfig, ScoringConfig, ScoringTripEstimator},
    generator::DefaultModeChainGeneratorFactory,
    home::HomeFinderConfig,
    router::RouterConfig,
    selector::SelectorConfig,
    tour::TourFinderConfig,
};
use dmc_core::model::{trip::TripListConverter, ModeChoiceError};
use dmc_gtfs::schedule::WaitingTimeEstimatorConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// how tours are formed and decided.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    #[serde(default)]
    pub tour_finder: TourFinderConfig,
    #[serde(default)]
    pub selector: SelectorConfig,
    /// write the estimated routes into the plan, or only the chosen modes
    #[serde(default = "default_write_routes")]
    pub write_routes: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            tour_finder: TourFinderConfig::default(),
            selector: SelectorConfig::default(),
            write_routes: default_write_routes(),
        }
    }
}

fn default_write_routes() -> bool {
    true
}

/// every section needed to build a [`ModeChoiceAlgorithm`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModeChoiceConfig {
    #[serde(default)]
    pub model: ModelConfig,
    pub modes: ModeAvailabilityConfig,
    #[serde(default)]
    pub constraints: Vec<ConstraintConfig>,
    #[serde(default)]
    pub home_finder: HomeFinderConfig,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    pub scoring: ScoringConfig,
    pub router: RouterConfig,
    #[serde(default)]
    pub waiting_time: WaitingTimeEstimatorConfig,
}

impl TryFrom<&ModeChoiceConfig> for ModeChoiceAlgorithm {
    type Error = ModeChoiceError;

    fn try_from(config: &ModeChoiceConfig) -> Result<Self, Self::Error> {
        let scored_modes = config.scoring.modes();
        for mode in config.modes.modes().iter() {
            if !scored_modes.contains(&mode.as_str()) {
                log::warn!("mode '{mode}' is available but has no scoring parameters");
            }
        }

        let transit_mode = &config.estimator.transit_mode;
        let transit_available = config.modes.modes().contains(transit_mode);
        let transit_is_vehicular = config.estimator.pt_leg_modes.contains(transit_mode);
        if transit_available && transit_is_vehicular && !config.router.routes_transit(transit_mode) {
            return Err(ModeChoiceError::BuildError(format!(
                "mode '{transit_mode}' is available but the router has no transit section to route it"
            )));
        }
        config.model.selector.validate()?;

        let router = config.router.build()?;
        let scoring = config.scoring.build();
        let waiting_time = config.waiting_time.build().map_err(|e| {
            ModeChoiceError::BuildError(format!("while building waiting time estimator, {e}"))
        })?;
        let trip_estimator = ScoringTripEstimator::new(
            router,
            scoring,
            waiting_time,
            &config.estimator.transit_mode,
            config.estimator.pt_leg_modes.iter().cloned().collect(),
        );
        let estimator = CumulativeTourEstimator::new(Arc::new(trip_estimator));
        let constraint_factory = ConstraintConfig::build_all(&config.constraints)?;
        log::debug!(
            "built mode choice model with {} constraint(s) and selector {:?}",
            constraint_factory.len(),
            config.model.selector
        );

        let model = TourBasedModel::new(
            Arc::new(estimator),
            config.modes.build(),
            Arc::new(constraint_factory),
            config.model.tour_finder.build(),
            Arc::new(config.model.selector.clone()),
            Arc::new(DefaultModeChainGeneratorFactory),
            config.home_finder.build(),
        );
        Ok(ModeChoiceAlgorithm::new(
            model,
            TripListConverter::default(),
            config.model.write_routes,
        ))
    }
}
