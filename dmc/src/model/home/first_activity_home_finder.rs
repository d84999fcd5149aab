use dmc_core::model::{component::HomeFinder, trip::Trip};

/// the home is wherever the first trip starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstActivityHomeFinder;

impl HomeFinder for FirstActivityHomeFinder {
    fn find_home(&self, trips: &[Trip]) -> Option<String> {
        trips
            .first()
            .map(|t| t.origin_activity.location_id().to_string())
    }
}
