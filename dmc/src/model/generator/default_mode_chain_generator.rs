use dmc_core::model::{
    component::{ModeChainGenerator, ModeChainGeneratorFactory},
    trip::Trip,
    ModeChoiceError,
};

/// enumerates every assignment of the available modes to the trips of a tour
/// in odometer order: the mode of the last trip changes fastest.
#[derive(Debug, Clone)]
pub struct DefaultModeChainGenerator {
    modes: Vec<String>,
    n_trips: usize,
    n_alternatives: usize,
    index: usize,
}

impl DefaultModeChainGenerator {
    /// # Errors
    ///
    /// if `modes.len() ^ n_trips` does not fit into a `usize`.
    pub fn new(modes: &[String], n_trips: usize) -> Result<Self, ModeChoiceError> {
        let n_alternatives = if n_trips == 0 {
            0
        } else {
            u32::try_from(n_trips)
                .ok()
                .and_then(|exp| modes.len().checked_pow(exp))
                .ok_or(ModeChoiceError::TooManyAlternatives {
                    n_modes: modes.len(),
                    n_trips,
                })?
        };
        Ok(Self {
            modes: modes.to_vec(),
            n_trips,
            n_alternatives,
            index: 0,
        })
    }

    /// decodes an alternative index as digits in base `modes.len()`, most
    /// significant digit first.
    fn chain_at(&self, index: usize) -> Vec<String> {
        let n_modes = self.modes.len();
        let mut chain = vec![String::new(); self.n_trips];
        let mut remainder = index;
        for slot in chain.iter_mut().rev() {
            *slot = self.modes[remainder % n_modes].clone();
            remainder /= n_modes;
        }
        chain
    }
}

impl Iterator for DefaultModeChainGenerator {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.n_alternatives {
            return None;
        }
        let chain = self.chain_at(self.index);
        self.index += 1;
        Some(chain)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n_alternatives - self.index;
        (remaining, Some(remaining))
    }
}

impl ModeChainGenerator for DefaultModeChainGenerator {
    fn number_of_alternatives(&self) -> usize {
        self.n_alternatives
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultModeChainGeneratorFactory;

impl ModeChainGeneratorFactory for DefaultModeChainGeneratorFactory {
    fn create_generator(
        &self,
        available_modes: &[String],
        trips: &[Trip],
    ) -> Result<Box<dyn ModeChainGenerator>, ModeChoiceError> {
        let generator = DefaultModeChainGenerator::new(available_modes, trips.len())?;
        Ok(Box::new(generator))
    }
}
