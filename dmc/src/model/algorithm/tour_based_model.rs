use dmc_core::model::{
    candidate::{TourCandidate, TripCandidate},
    component::{
        HomeFinder, ModeAvailability, ModeChainGeneratorFactory, TourConstraintFactory,
        TourEstimator, TourFinder, UtilitySelectorFactory,
    },
    plan::Person,
    trip::Trip,
    ModeChoiceError,
};
use rand::RngCore;
use std::sync::Arc;

/// decides the modes of a person tour by tour. for each tour, every mode
/// chain from the generator that passes the constraint is estimated, and the
/// selector picks one of the estimated candidates.
///
/// all components are shared and immutable, so one model serves any number of
/// threads. selectors and constraints are created per tour.
pub struct TourBasedModel {
    estimator: Arc<dyn TourEstimator>,
    mode_availability: Arc<dyn ModeAvailability>,
    constraint_factory: Arc<dyn TourConstraintFactory>,
    tour_finder: Arc<dyn TourFinder>,
    selector_factory: Arc<dyn UtilitySelectorFactory<TourCandidate>>,
    mode_chain_generator_factory: Arc<dyn ModeChainGeneratorFactory>,
    home_finder: Arc<dyn HomeFinder>,
}

impl TourBasedModel {
    pub fn new(
        estimator: Arc<dyn TourEstimator>,
        mode_availability: Arc<dyn ModeAvailability>,
        constraint_factory: Arc<dyn TourConstraintFactory>,
        tour_finder: Arc<dyn TourFinder>,
        selector_factory: Arc<dyn UtilitySelectorFactory<TourCandidate>>,
        mode_chain_generator_factory: Arc<dyn ModeChainGeneratorFactory>,
        home_finder: Arc<dyn HomeFinder>,
    ) -> Self {
        Self {
            estimator,
            mode_availability,
            constraint_factory,
            tour_finder,
            selector_factory,
            mode_chain_generator_factory,
            home_finder,
        }
    }

    /// chooses one trip candidate per trip, in trip order.
    ///
    /// # Errors
    ///
    /// [`ModeChoiceError::NoFeasibleChoice`] if every mode chain of a tour is
    /// rejected, or any error of the estimator.
    pub fn choose_modes(
        &self,
        person: &Person,
        trips: &[Trip],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<TripCandidate>, ModeChoiceError> {
        let available_modes = self.mode_availability.available_modes(person, trips);
        let home = self.home_finder.find_home(trips);
        let tours = self.tour_finder.find_tours(trips);
        log::debug!(
            "person '{}': {} trips in {} tours, modes [{}], home {}",
            person.id,
            trips.len(),
            tours.len(),
            available_modes.join(", "),
            home.as_deref().unwrap_or("unknown")
        );

        let mut chosen_tours: Vec<TourCandidate> = Vec::with_capacity(tours.len());
        let mut previous_modes: Vec<Vec<String>> = Vec::with_capacity(tours.len());

        for (tour_index, tour) in tours.into_iter().enumerate() {
            let constraint =
                self.constraint_factory
                    .create_constraint(person, tour, home.as_deref(), &available_modes);
            let generator = self
                .mode_chain_generator_factory
                .create_generator(&available_modes, tour)?;
            let n_alternatives = generator.number_of_alternatives();
            let mut selector = self.selector_factory.create_selector();
            let mut accepted: Vec<TourCandidate> = vec![];

            for modes in generator {
                if !constraint.validate_before_estimation(&modes, &previous_modes) {
                    continue;
                }
                let candidate = self
                    .estimator
                    .estimate_tour(person, &modes, tour, &chosen_tours)?;
                if !constraint.validate_after_estimation(&candidate, &accepted) {
                    continue;
                }
                accepted.push(candidate.clone());
                selector.add_candidate(candidate);
            }

            let selected = selector.select(rng).cloned().ok_or_else(|| {
                ModeChoiceError::NoFeasibleChoice {
                    person_id: person.id.clone(),
                    tour_index,
                    n_alternatives,
                }
            })?;
            log::debug!(
                "person '{}' tour {}: chose [{}] (utility {:.4}) among {} of {} chains",
                person.id,
                tour_index,
                selected.modes().join(", "),
                selected.utility,
                selector.number_of_candidates(),
                n_alternatives
            );
            previous_modes.push(selected.modes());
            chosen_tours.push(selected);
        }

        Ok(chosen_tours
            .into_iter()
            .flat_map(|tour| tour.trip_candidates)
            .collect())
    }
}
