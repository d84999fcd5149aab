use dmc_core::model::{candidate::UtilityCandidate, component::UtilitySelector};
use rand::RngCore;

/// picks the candidate with the highest utility. among equal utilities the
/// first candidate added wins. candidates with an undefined (NaN) utility are
/// never added.
#[derive(Debug)]
pub struct MaximumSelector<T> {
    candidates: Vec<T>,
}

impl<T> Default for MaximumSelector<T> {
    fn default() -> Self {
        Self { candidates: vec![] }
    }
}

impl<T: UtilityCandidate> UtilitySelector<T> for MaximumSelector<T> {
    fn add_candidate(&mut self, candidate: T) {
        if candidate.utility().is_nan() {
            log::debug!("skipping candidate with undefined utility");
            return;
        }
        self.candidates.push(candidate);
    }

    fn select(&self, _rng: &mut dyn RngCore) -> Option<&T> {
        let mut best: Option<&T> = None;
        for candidate in self.candidates.iter() {
            match best {
                Some(b) if b.utility() >= candidate.utility() => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    fn number_of_candidates(&self) -> usize {
        self.candidates.len()
    }
}
