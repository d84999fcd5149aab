use dmc_core::model::{component::ModeAvailability, plan::Person, trip::Trip};

/// offers the same modes to everyone.
#[derive(Debug, Clone)]
pub struct DefaultModeAvailability {
    modes: Vec<String>,
}

impl DefaultModeAvailability {
    pub fn new(modes: Vec<String>) -> Self {
        Self { modes }
    }
}

impl ModeAvailability for DefaultModeAvailability {
    fn available_modes(&self, _person: &Person, _trips: &[Trip]) -> Vec<String> {
        self.modes.clone()
    }
}
