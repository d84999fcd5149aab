use dmc_core::model::{candidate::UtilityCandidate, component::UtilitySelector};
use rand::{Rng, RngCore};

/// picks one of the candidates uniformly at random, ignoring utilities.
#[derive(Debug)]
pub struct RandomSelector<T> {
    candidates: Vec<T>,
}

impl<T> Default for RandomSelector<T> {
    fn default() -> Self {
        Self { candidates: vec![] }
    }
}

impl<T: UtilityCandidate> UtilitySelector<T> for RandomSelector<T> {
    fn add_candidate(&mut self, candidate: T) {
        self.candidates.push(candidate);
    }

    fn select(&self, rng: &mut dyn RngCore) -> Option<&T> {
        if self.candidates.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.candidates.len());
        self.candidates.get(index)
    }

    fn number_of_candidates(&self) -> usize {
        self.candidates.len()
    }
}
