use crate::model::{plan::Person, trip::Trip};

/// decides which modes a person may consider for their trips.
pub trait ModeAvailability: Send + Sync {
    fn available_modes(&self, person: &Person, trips: &[Trip]) -> Vec<String>;
}
