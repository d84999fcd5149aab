use super::TourBasedModel;
use dmc_core::model::{
    candidate::TripCandidate,
    plan::{Person, PlanElement},
    trip::{trip_list_ops, Trip, TripListConverter},
    ModeChoiceError,
};
use rand::RngCore;

/// runs the mode choice for one person and writes the decision into the plan.
pub struct ModeChoiceAlgorithm {
    model: TourBasedModel,
    converter: TripListConverter,
    /// when false, each trip is replaced by a single unrouted leg of the
    /// chosen mode instead of the estimated route
    write_routes: bool,
}

impl ModeChoiceAlgorithm {
    pub fn new(model: TourBasedModel, converter: TripListConverter, write_routes: bool) -> Self {
        Self {
            model,
            converter,
            write_routes,
        }
    }

    /// decides new modes for every trip of the person and replaces the trip
    /// elements of its plan. returns the chosen modes in trip order.
    ///
    /// on error the plan is left unchanged.
    pub fn run(
        &self,
        person: &mut Person,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, ModeChoiceError> {
        let trips = self.converter.convert(person)?;
        if trips.is_empty() {
            return Ok(vec![]);
        }
        let candidates = self.model.choose_modes(person, &trips, rng)?;
        if candidates.len() != trips.len() {
            return Err(ModeChoiceError::InternalError(format!(
                "person '{}' has {} trips but {} were decided",
                person.id,
                trips.len(),
                candidates.len()
            )));
        }

        let modes = candidates.iter().map(|c| c.mode.clone()).collect();
        let replacements = trips
            .iter()
            .zip(candidates)
            .map(|(trip, candidate)| self.trip_elements(trip, candidate))
            .collect::<Result<Vec<_>, _>>()?;
        trip_list_ops::replace_trip_elements(person, replacements)?;
        Ok(modes)
    }

    fn trip_elements(
        &self,
        trip: &Trip,
        candidate: TripCandidate,
    ) -> Result<Vec<PlanElement>, ModeChoiceError> {
        if self.write_routes && !candidate.elements.is_empty() {
            return Ok(candidate.elements);
        }
        let mut leg = trip.legs().next().cloned().ok_or_else(|| {
            ModeChoiceError::InternalError(format!("trip {} has no legs", trip.index))
        })?;
        leg.mode = candidate.mode;
        leg.routing_mode = None;
        leg.travel_time = None;
        leg.route = None;
        Ok(vec![leg.into()])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{
        availability::DefaultModeAvailability,
        constraint::{ConstraintConfig, VehicleTourConstraintConfig},
        estimator::CumulativeTourEstimator,
        generator::DefaultModeChainGeneratorFactory,
        home::ActivityTypeHomeFinder,
        selector::SelectorConfig,
        test_ops::person_visiting,
        tour::PlanTourFinder,
    };
    use dmc_core::model::{
        component::TripEstimator,
        plan::Leg,
    };
    use dmc_core::util::time_ops::seconds;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;
    use std::sync::Arc;

    /// fixed utility per mode, with separate values for the first trip. every
    /// candidate is one leg with a 10 minute travel time.
    struct FixedUtility {
        utilities: HashMap<&'static str, f64>,
        first_trip: HashMap<&'static str, f64>,
    }

    impl TripEstimator for FixedUtility {
        fn estimate_trip(
            &self,
            _person: &Person,
            mode: &str,
            trip: &Trip,
            _previous_trips: &[TripCandidate],
        ) -> Result<TripCandidate, ModeChoiceError> {
            let first = if trip.index == 0 { self.first_trip.get(mode) } else { None };
            let utility = first
                .or_else(|| self.utilities.get(mode))
                .copied()
                .ok_or_else(|| ModeChoiceError::MissingScoringParameters(mode.to_string()))?;
            let leg = Leg::new(mode).with_travel_time(seconds(600.0));
            Ok(TripCandidate::new(mode, utility, Some(seconds(600.0)), vec![leg.into()]))
        }
    }

    fn build_algorithm(
        modes: &[&str],
        utilities: &[(&'static str, f64)],
        first_trip: &[(&'static str, f64)],
        constraints: &[ConstraintConfig],
        write_routes: bool,
    ) -> ModeChoiceAlgorithm {
        let estimator = CumulativeTourEstimator::new(Arc::new(FixedUtility {
            utilities: utilities.iter().copied().collect(),
            first_trip: first_trip.iter().copied().collect(),
        }));
        let constraint_factory =
            ConstraintConfig::build_all(constraints).expect("test invariant failed");
        let model = TourBasedModel::new(
            Arc::new(estimator),
            Arc::new(DefaultModeAvailability::new(
                modes.iter().map(|m| m.to_string()).collect(),
            )),
            Arc::new(constraint_factory),
            Arc::new(PlanTourFinder),
            Arc::new(SelectorConfig::Maximum),
            Arc::new(DefaultModeChainGeneratorFactory),
            Arc::new(ActivityTypeHomeFinder::new("home")),
        );
        ModeChoiceAlgorithm::new(model, TripListConverter::default(), write_routes)
    }

    fn car_continuity() -> ConstraintConfig {
        ConstraintConfig::VehicleContinuity(VehicleTourConstraintConfig {
            require_start_at_home: vec![String::from("car")],
            require_continuity: vec![String::from("car")],
            require_end_at_home: vec![String::from("car")],
            require_existing_home: false,
        })
    }

    fn commuter() -> Person {
        person_visiting(
            "commuter",
            &[
                ("home", "h", 0.0, 0.0),
                ("work", "w", 1000.0, 0.0),
                ("shop", "s", 1000.0, 1000.0),
                ("home", "h", 0.0, 0.0),
            ],
            "walk",
        )
    }

    fn leg_modes(person: &Person) -> Vec<String> {
        person
            .plan
            .iter()
            .filter_map(PlanElement::as_leg)
            .map(|l| l.mode.clone())
            .collect()
    }

    #[test]
    fn test_maximum_picks_best_chain() {
        let algorithm = build_algorithm(
            &["car", "walk"],
            &[("car", -1.0), ("walk", -3.0)],
            &[],
            &[],
            true,
        );
        let mut person = commuter();
        let mut rng = StdRng::seed_from_u64(0);
        let modes = algorithm.run(&mut person, &mut rng).expect("test failed");
        assert_eq!(modes, vec!["car", "car", "car"]);
        assert_eq!(leg_modes(&person), vec!["car", "car", "car"]);
        let first_leg = person.plan[1].as_leg().expect("test failed");
        assert_eq!(first_leg.travel_time, Some(seconds(600.0)));
    }

    #[test]
    fn test_continuity_applies_through_the_model() {
        // driving pays off on the first trip only, but a car left at work
        // must be driven home again
        let utilities = [("car", -5.0), ("walk", -1.0)];
        let first_trip = [("car", 0.0), ("walk", -10.0)];
        let mut rng = StdRng::seed_from_u64(0);

        let unconstrained = build_algorithm(&["car", "walk"], &utilities, &first_trip, &[], true);
        let modes = unconstrained
            .run(&mut commuter(), &mut rng)
            .expect("test failed");
        assert_eq!(modes, vec!["car", "walk", "walk"]);

        let constrained = build_algorithm(
            &["car", "walk"],
            &utilities,
            &first_trip,
            &[car_continuity()],
            true,
        );
        let modes = constrained
            .run(&mut commuter(), &mut rng)
            .expect("test failed");
        assert_eq!(modes, vec!["car", "car", "car"]);
    }

    #[test]
    fn test_infeasible_leaves_plan_unchanged() {
        let algorithm = build_algorithm(
            &["car", "walk"],
            &[("car", -1.0), ("walk", -1.0)],
            &[],
            &[ConstraintConfig::AllowedModes {
                allowed_modes: vec![String::from("bike")],
            }],
            true,
        );
        let mut person = commuter();
        let before = person.plan.clone();
        let mut rng = StdRng::seed_from_u64(0);
        let result = algorithm.run(&mut person, &mut rng);
        match result {
            Err(ModeChoiceError::NoFeasibleChoice {
                person_id,
                tour_index,
                n_alternatives,
            }) => {
                assert_eq!(person_id, "commuter");
                assert_eq!(tour_index, 0);
                assert_eq!(n_alternatives, 8);
            }
            other => panic!("expected no feasible choice, found {other:?}"),
        }
        assert_eq!(person.plan, before);
    }

    #[test]
    fn test_estimation_error_leaves_plan_unchanged() {
        let algorithm = build_algorithm(&["car", "taxi"], &[("car", -1.0)], &[], &[], true);
        let mut person = commuter();
        let before = person.plan.clone();
        let mut rng = StdRng::seed_from_u64(0);
        let result = algorithm.run(&mut person, &mut rng);
        assert!(matches!(
            result,
            Err(ModeChoiceError::MissingScoringParameters(_))
        ));
        assert_eq!(person.plan, before);
    }

    #[test]
    fn test_write_back_without_routes() {
        let algorithm = build_algorithm(&["bike"], &[("bike", -1.0)], &[], &[], false);
        let mut person = commuter();
        let mut rng = StdRng::seed_from_u64(0);
        algorithm.run(&mut person, &mut rng).expect("test failed");
        assert_eq!(leg_modes(&person), vec!["bike", "bike", "bike"]);
        assert_eq!(person.plan.len(), 7);
        for leg in person.plan.iter().filter_map(PlanElement::as_leg) {
            assert_eq!(leg.travel_time, None);
            assert_eq!(leg.route, None);
            assert_eq!(leg.routing_mode, None);
        }
    }

    #[test]
    fn test_person_without_trips() {
        let algorithm = build_algorithm(&["car"], &[("car", -1.0)], &[], &[], true);
        let mut person = person_visiting("stay_at_home", &[("home", "h", 0.0, 0.0)], "walk");
        let mut rng = StdRng::seed_from_u64(0);
        let modes = algorithm.run(&mut person, &mut rng).expect("test failed");
        assert!(modes.is_empty());
        assert_eq!(person.plan.len(), 1);
    }
}
