use super::{schedule_ops, ScheduleError, StopRow};
use geo::Point;
use std::{collections::HashMap, path::Path};

/// projected coordinates of the transit stops, keyed by stop id.
#[derive(Debug, Default)]
pub struct TransitStops {
    coords: HashMap<String, Point<f64>>,
}

impl TransitStops {
    /// builds the lookup, rejecting stops listed twice or with a coordinate
    /// that is not finite.
    pub fn from_rows(rows: impl IntoIterator<Item = StopRow>) -> Result<TransitStops, ScheduleError> {
        let mut coords = HashMap::new();
        for row in rows {
            if !(row.x.is_finite() && row.y.is_finite()) {
                return Err(ScheduleError::InvalidData(format!(
                    "stop '{}' has invalid coordinate ({}, {})",
                    row.stop_id, row.x, row.y
                )));
            }
            if coords.insert(row.stop_id.clone(), Point::new(row.x, row.y)).is_some() {
                return Err(ScheduleError::InvalidData(format!(
                    "stop '{}' is listed more than once",
                    row.stop_id
                )));
            }
        }
        Ok(TransitStops { coords })
    }

    pub fn get(&self, stop_id: &str) -> Option<Point<f64>> {
        self.coords.get(stop_id).copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl TryFrom<&Path> for TransitStops {
    type Error = ScheduleError;

    /// reads a CSV file with columns stop_id, x, y.
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let rows: Vec<StopRow> = schedule_ops::read_csv_rows(path)?;
        log::debug!("{} - loaded {} stop rows", path.display(), rows.len());
        TransitStops::from_rows(rows)
    }
}
