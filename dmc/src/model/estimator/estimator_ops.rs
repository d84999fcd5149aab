use dmc_core::model::{
    component::{ModeUtilityParameters, ScoringParameters},
    plan::{Leg, PlanElement},
    ModeChoiceError,
};
use uom::si::f64::Time;
use uom::si::{length::meter, time::second};
use uom::ConstZero;

/// mode whose parameters apply to walking legs of other modes without their
/// own parameters (access, egress, transfers).
pub const WALK_MODE: &str = "walk";

/// utility and travel time accumulated over the legs of a trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripScore {
    pub utility: f64,
    /// `None` if a leg has no travel time
    pub travel_time: Option<Time>,
}

/// parameters that score a leg of the given mode. modes without parameters
/// that contain `walk` fall back to the walk parameters.
pub fn leg_mode_parameters<'a>(
    parameters: &'a ScoringParameters,
    mode: &str,
) -> Result<&'a ModeUtilityParameters, ModeChoiceError> {
    match parameters.mode_parameters(mode) {
        Some(p) => Ok(p),
        None if mode.contains(WALK_MODE) => parameters
            .mode_parameters(WALK_MODE)
            .ok_or_else(|| ModeChoiceError::MissingScoringParameters(format!("{mode} (nor {WALK_MODE})"))),
        None => Err(ModeChoiceError::MissingScoringParameters(mode.to_string())),
    }
}

/// constant + time term + distance term + monetary distance cost term.
pub fn leg_utility(parameters: &ScoringParameters, leg: &Leg) -> Result<f64, ModeChoiceError> {
    let mode_parameters = leg_mode_parameters(parameters, &leg.mode)?;
    let travel_time = leg.travel_time.unwrap_or(Time::ZERO).get::<second>();
    let distance = leg.distance().get::<meter>();

    let mut utility = mode_parameters.constant;
    utility += mode_parameters.marginal_utility_of_traveling * travel_time;
    utility += mode_parameters.marginal_utility_of_distance * distance;
    utility += parameters.marginal_utility_of_money
        * mode_parameters.monetary_distance_cost_rate
        * distance;
    Ok(utility)
}

/// sums leg utilities and leg travel times over the elements of a trip.
pub fn score_legs(
    parameters: &ScoringParameters,
    elements: &[PlanElement],
) -> Result<TripScore, ModeChoiceError> {
    let mut utility = 0.0;
    let mut travel_time = Some(Time::ZERO);
    for leg in elements.iter().filter_map(PlanElement::as_leg) {
        utility += leg_utility(parameters, leg)?;
        travel_time = match (travel_time, leg.travel_time) {
            (Some(total), Some(leg_time)) => Some(total + leg_time),
            _ => None,
        };
    }
    Ok(TripScore {
        utility,
        travel_time,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use dmc_core::model::plan::Route;
    use dmc_core::util::time_ops::seconds;
    use std::collections::HashMap;
    use uom::si::f64::Length;

    fn car_parameters() -> ScoringParameters {
        ScoringParameters {
            marginal_utility_of_money: -1.0,
            mode_params: HashMap::from([(
                String::from("car"),
                ModeUtilityParameters {
                    constant: 0.0,
                    marginal_utility_of_traveling: -0.01,
                    marginal_utility_of_distance: 0.0,
                    monetary_distance_cost_rate: 0.0002,
                },
            )]),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_leg_utility() {
        let leg = Leg::new("car")
            .with_travel_time(seconds(600.0))
            .with_route(Route::new(Length::new::<meter>(5000.0)));
        let utility = leg_utility(&car_parameters(), &leg).expect("test failed");
        assert!((utility - -7.0).abs() < 1e-9, "utility was {utility}");
    }

    #[test]
    fn test_walk_fallback() {
        let mut parameters = car_parameters();
        parameters.mode_params.insert(
            String::from("walk"),
            ModeUtilityParameters {
                constant: -1.0,
                ..Default::default()
            },
        );
        let access = Leg::new("access_walk").with_travel_time(seconds(60.0));
        assert_eq!(leg_utility(&parameters, &access).expect("test failed"), -1.0);
        let unknown = Leg::new("bike");
        assert!(matches!(
            leg_utility(&parameters, &unknown),
            Err(ModeChoiceError::MissingScoringParameters(_))
        ));
    }

    #[test]
    fn test_walk_fallback_without_walk_parameters() {
        let access = Leg::new("access_walk");
        assert!(leg_utility(&car_parameters(), &access).is_err());
    }

    #[test]
    fn test_score_legs_travel_time() {
        let elements: Vec<PlanElement> = vec![
            Leg::new("car").with_travel_time(seconds(100.0)).into(),
            Leg::new("car").with_travel_time(seconds(50.0)).into(),
        ];
        let score = score_legs(&car_parameters(), &elements).expect("test failed");
        assert_eq!(score.travel_time, Some(seconds(150.0)));
        assert!((score.utility - -1.5).abs() < 1e-9);

        let elements: Vec<PlanElement> = vec![
            Leg::new("car").with_travel_time(seconds(100.0)).into(),
            Leg::new("car").into(),
        ];
        let score = score_legs(&car_parameters(), &elements).expect("test failed");
        assert_eq!(score.travel_time, None);
    }
}
