use dmc_core::model::{component::HomeFinder, trip::Trip};

/// the home is the location of the first activity of the configured type,
/// searching origins and destinations in plan order.
#[derive(Debug, Clone)]
pub struct ActivityTypeHomeFinder {
    activity_type: String,
}

impl ActivityTypeHomeFinder {
    pub fn new(activity_type: &str) -> Self {
        Self {
            activity_type: activity_type.to_string(),
        }
    }
}

impl HomeFinder for ActivityTypeHomeFinder {
    fn find_home(&self, trips: &[Trip]) -> Option<String> {
        trips
            .iter()
            .flat_map(|t| [&t.origin_activity, &t.destination_activity])
            .find(|a| a.activity_type == self.activity_type)
            .map(|a| a.location_id().to_string())
    }
}
