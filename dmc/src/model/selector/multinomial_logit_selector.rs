use dmc_core::model::{candidate::UtilityCandidate, component::UtilitySelector};
use rand::{Rng, RngCore};

/// samples a candidate with probability proportional to `exp(utility)`.
/// utilities are clamped to `[min_utility, max_utility]` first. candidates
/// with an undefined (NaN) utility are never added.
#[derive(Debug)]
pub struct MultinomialLogitSelector<T> {
    candidates: Vec<T>,
    min_utility: f64,
    max_utility: f64,
}

impl<T> MultinomialLogitSelector<T> {
    pub const DEFAULT_MIN_UTILITY: f64 = -700.0;
    pub const DEFAULT_MAX_UTILITY: f64 = 700.0;

    pub fn new(min_utility: f64, max_utility: f64) -> Self {
        Self {
            candidates: vec![],
            min_utility,
            max_utility,
        }
    }
}

impl<T> Default for MultinomialLogitSelector<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_UTILITY, Self::DEFAULT_MAX_UTILITY)
    }
}

impl<T: UtilityCandidate> MultinomialLogitSelector<T> {
    /// choice probabilities of the candidates, in insertion order.
    pub fn probabilities(&self) -> Vec<f64> {
        let utilities = self
            .candidates
            .iter()
            .map(|c| c.utility().max(self.min_utility).min(self.max_utility))
            .collect::<Vec<_>>();
        let max_utility = utilities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights = utilities
            .iter()
            .map(|u| {
                let w = (u - max_utility).exp();
                if w.is_finite() {
                    w
                } else {
                    0.0
                }
            })
            .collect::<Vec<_>>();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            let n = weights.len() as f64;
            return weights.iter().map(|_| 1.0 / n).collect();
        }
        weights.iter().map(|w| w / total).collect()
    }
}

impl<T: UtilityCandidate> UtilitySelector<T> for MultinomialLogitSelector<T> {
    fn add_candidate(&mut self, candidate: T) {
        if candidate.utility().is_nan() {
            log::debug!("skipping candidate with undefined utility");
            return;
        }
        self.candidates.push(candidate);
    }

    fn select(&self, rng: &mut dyn RngCore) -> Option<&T> {
        if self.candidates.len() < 2 {
            return self.candidates.first();
        }
        let draw = rng.random::<f64>();
        let mut cumulative = 0.0;
        for (candidate, probability) in self.candidates.iter().zip(self.probabilities()) {
            cumulative += probability;
            if draw < cumulative {
                return Some(candidate);
            }
        }
        // rounding left the cumulative sum just below one
        self.candidates.last()
    }

    fn number_of_candidates(&self) -> usize {
        self.candidates.len()
    }
}
