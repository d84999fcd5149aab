use crate::model::trip::Trip;

/// resolves the location id of a person's home from their trips.
pub trait HomeFinder: Send + Sync {
    /// `None` if no home can be identified.
    fn find_home(&self, trips: &[Trip]) -> Option<String>;
}
