use dmc_core::model::{component::TourFinder, trip::Trip};

/// closes a tour after every trip that arrives at an activity of the anchor
/// type. trips after the last arrival at the anchor form a final tour.
#[derive(Debug, Clone)]
pub struct ActivityTourFinder {
    activity_type: String,
}

impl ActivityTourFinder {
    pub fn new(activity_type: &str) -> Self {
        Self {
            activity_type: activity_type.to_string(),
        }
    }
}

impl TourFinder for ActivityTourFinder {
    fn find_tours<'a>(&self, trips: &'a [Trip]) -> Vec<&'a [Trip]> {
        trips
            .split_inclusive(|t| t.destination_activity.activity_type == self.activity_type)
            .collect()
    }
}
