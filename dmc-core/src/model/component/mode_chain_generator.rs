use crate::model::{trip::Trip, ModeChoiceError};

/// produces the candidate mode chains of one tour. every chain holds one mode
/// per trip of the tour.
pub trait ModeChainGenerator: Iterator<Item = Vec<String>> {
    /// how many chains the generator yields in total.
    fn number_of_alternatives(&self) -> usize;
}

/// builds a fresh [`ModeChainGenerator`] for every tour.
pub trait ModeChainGeneratorFactory: Send + Sync {
    /// # Errors
    ///
    /// if the chains of the tour cannot be enumerated.
    fn create_generator(
        &self,
        available_modes: &[String],
        trips: &[Trip],
    ) -> Result<Box<dyn ModeChainGenerator>, ModeChoiceError>;
}
