/// anything a utility selector can choose from.
pub trait UtilityCandidate {
    fn utility(&self) -> f64;
}
