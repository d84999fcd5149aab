use crate::model::candidate::UtilityCandidate;
use rand::RngCore;

/// collects scored candidates and picks one of them.
pub trait UtilitySelector<T: UtilityCandidate> {
    fn add_candidate(&mut self, candidate: T);

    /// `None` if no candidate was added.
    fn select(&self, rng: &mut dyn RngCore) -> Option<&T>;

    fn number_of_candidates(&self) -> usize;
}

/// builds an empty selector for each decision.
pub trait UtilitySelectorFactory<T: UtilityCandidate>: Send + Sync {
    fn create_selector(&self) -> Box<dyn UtilitySelector<T>>;
}
