use crate::model::trip::Trip;

/// partitions the trips of a person into tours. the returned tours are
/// contiguous, in trip order, and cover every trip exactly once.
pub trait TourFinder: Send + Sync {
    fn find_tours<'a>(&self, trips: &'a [Trip]) -> Vec<&'a [Trip]>;
}
