use super::estimator_ops;
use dmc_core::model::{
    candidate::TripCandidate,
    component::{
        ScoringParameters, ScoringParametersForPerson, TripEstimator, TripRouter,
        WaitingTimeEstimator,
    },
    plan::{Person, PlanElement},
    trip::Trip,
    ModeChoiceError,
};
use std::{collections::HashSet, sync::Arc};
use uom::si::{f64::Time, time::second};
use uom::ConstZero;

/// routes a trip with the candidate mode and scores the resulting legs with
/// a linear travel utility. trips of the transit mode additionally pay for
/// the expected wait before each vehicular leg and for every line switch.
pub struct ScoringTripEstimator {
    router: Arc<dyn TripRouter>,
    scoring: Arc<dyn ScoringParametersForPerson>,
    waiting_time: Arc<dyn WaitingTimeEstimator>,
    transit_mode: String,
    pt_leg_modes: HashSet<String>,
}

impl ScoringTripEstimator {
    pub fn new(
        router: Arc<dyn TripRouter>,
        scoring: Arc<dyn ScoringParametersForPerson>,
        waiting_time: Arc<dyn WaitingTimeEstimator>,
        transit_mode: &str,
        pt_leg_modes: HashSet<String>,
    ) -> Self {
        Self {
            router,
            scoring,
            waiting_time,
            transit_mode: transit_mode.to_string(),
            pt_leg_modes,
        }
    }

    fn score_transit_trip(
        &self,
        parameters: &ScoringParameters,
        elements: &[PlanElement],
        departure_time: Time,
    ) -> Result<estimator_ops::TripScore, ModeChoiceError> {
        let mut score = estimator_ops::score_legs(parameters, elements)?;

        let mut n_vehicular_legs: usize = 0;
        let mut total_waiting_time = Time::ZERO;
        let mut time = departure_time;

        for leg in elements.iter().filter_map(PlanElement::as_leg) {
            if self.pt_leg_modes.contains(&leg.mode) {
                let route = leg
                    .route
                    .as_ref()
                    .and_then(|r| r.transit.as_ref())
                    .ok_or_else(|| {
                        ModeChoiceError::InvalidRoute(format!(
                            "'{}' leg has no transit route description",
                            leg.mode
                        ))
                    })?;
                total_waiting_time += self.waiting_time.estimate_waiting_time(time, route);
                n_vehicular_legs += 1;
            }
            if let Some(travel_time) = leg.travel_time {
                time += travel_time;
            }
        }

        score.utility += parameters.marginal_utility_of_waiting_pt * total_waiting_time.get::<second>();
        score.travel_time = score.travel_time.map(|t| t + total_waiting_time);

        if n_vehicular_legs > 0 {
            score.utility += parameters.utility_of_line_switch * (n_vehicular_legs - 1) as f64;
        }

        Ok(score)
    }
}

impl TripEstimator for ScoringTripEstimator {
    fn estimate_trip(
        &self,
        person: &Person,
        mode: &str,
        trip: &Trip,
        _previous_trips: &[TripCandidate],
    ) -> Result<TripCandidate, ModeChoiceError> {
        let parameters = self.scoring.scoring_parameters(person);
        if parameters.mode_parameters(mode).is_none() {
            return Err(ModeChoiceError::MissingScoringParameters(mode.to_string()));
        }

        let elements = self.router.route(
            &trip.origin_activity,
            &trip.destination_activity,
            mode,
            trip.departure_time,
        )?;

        let score = if mode == self.transit_mode {
            self.score_transit_trip(parameters, &elements, trip.departure_time)?
        } else {
            estimator_ops::score_legs(parameters, &elements)?
        };

        Ok(TripCandidate::new(
            mode,
            score.utility,
            score.travel_time,
            elements,
        ))
    }
}
