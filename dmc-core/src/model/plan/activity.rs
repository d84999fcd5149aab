use crate::util::time_ops;
use geo::Point;
use serde::{Deserialize, Serialize};
use uom::si::f64::Time;

/// an activity performed by a person, either a main activity (home, work, ...)
/// which separates trips, or a stage activity (e.g. "pt interaction") which
/// belongs to the trip it appears in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    /// network link where the activity takes place
    pub link_id: String,
    /// facility where the activity takes place, if known. takes precedence
    /// over the link when comparing locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    /// projected coordinate of the activity in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coord: Option<Point<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "time_ops::deserialize_optional_time",
        serialize_with = "time_ops::serialize_optional_time"
    )]
    pub end_time: Option<Time>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "time_ops::deserialize_optional_time",
        serialize_with = "time_ops::serialize_optional_time"
    )]
    pub max_duration: Option<Time>,
}

impl Activity {
    /// activity types with this suffix are stage activities.
    pub const STAGE_ACTIVITY_SUFFIX: &'static str = " interaction";

    pub fn new(activity_type: &str, link_id: &str) -> Activity {
        Activity {
            activity_type: activity_type.to_string(),
            link_id: link_id.to_string(),
            facility_id: None,
            coord: None,
            end_time: None,
            max_duration: None,
        }
    }

    pub fn with_facility(mut self, facility_id: &str) -> Activity {
        self.facility_id = Some(facility_id.to_string());
        self
    }

    pub fn with_coord(mut self, x: f64, y: f64) -> Activity {
        self.coord = Some(Point::new(x, y));
        self
    }

    pub fn with_end_time(mut self, end_time: Time) -> Activity {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_max_duration(mut self, max_duration: Time) -> Activity {
        self.max_duration = Some(max_duration);
        self
    }

    /// the location used when comparing where activities take place: the
    /// facility if present, otherwise the link.
    pub fn location_id(&self) -> &str {
        self.facility_id.as_deref().unwrap_or(&self.link_id)
    }

    pub fn is_stage_activity(&self) -> bool {
        self.activity_type.ends_with(Self::STAGE_ACTIVITY_SUFFIX)
    }
}
