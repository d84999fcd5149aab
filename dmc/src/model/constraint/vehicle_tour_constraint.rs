use super::constraint_ops;
use dmc_core::model::{
    component::{TourConstraint, TourConstraintFactory},
    plan::Person,
    trip::Trip,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// modes that use a private vehicle which must be picked up where it was
/// left.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VehicleTourConstraintConfig {
    /// the first trip with one of these modes must depart from home
    #[serde(default)]
    pub require_start_at_home: Vec<String>,
    /// every trip with one of these modes must depart where the previous one
    /// with the same mode arrived
    #[serde(default)]
    pub require_continuity: Vec<String>,
    /// the last trip with one of these modes must arrive at home
    #[serde(default)]
    pub require_end_at_home: Vec<String>,
    /// if false, the home rules are skipped for persons without a known home
    #[serde(default)]
    pub require_existing_home: bool,
}

#[derive(Debug, Clone)]
pub struct VehicleTourConstraintFactory {
    require_start_at_home: BTreeSet<String>,
    require_continuity: BTreeSet<String>,
    require_end_at_home: BTreeSet<String>,
    require_existing_home: bool,
    test_modes: BTreeSet<String>,
}

/// vehicle continuity rules over the trips of one tour.
pub struct VehicleTourConstraint<'a> {
    trips: &'a [Trip],
    home: Option<&'a str>,
    rules: &'a VehicleTourConstraintFactory,
}

impl From<&VehicleTourConstraintConfig> for VehicleTourConstraintFactory {
    fn from(value: &VehicleTourConstraintConfig) -> Self {
        let require_start_at_home: BTreeSet<String> =
            value.require_start_at_home.iter().cloned().collect();
        let require_continuity: BTreeSet<String> =
            value.require_continuity.iter().cloned().collect();
        let require_end_at_home: BTreeSet<String> =
            value.require_end_at_home.iter().cloned().collect();
        let test_modes = require_start_at_home
            .iter()
            .chain(require_continuity.iter())
            .chain(require_end_at_home.iter())
            .cloned()
            .collect();
        Self {
            require_start_at_home,
            require_continuity,
            require_end_at_home,
            require_existing_home: value.require_existing_home,
            test_modes,
        }
    }
}

impl TourConstraintFactory for VehicleTourConstraintFactory {
    fn create_constraint<'a>(
        &'a self,
        _person: &Person,
        trips: &'a [Trip],
        home: Option<&'a str>,
        _available_modes: &[String],
    ) -> Box<dyn TourConstraint + 'a> {
        Box::new(VehicleTourConstraint {
            trips,
            home,
            rules: self,
        })
    }
}

impl<'a> VehicleTourConstraint<'a> {
    pub fn new(
        trips: &'a [Trip],
        home: Option<&'a str>,
        rules: &'a VehicleTourConstraintFactory,
    ) -> Self {
        Self { trips, home, rules }
    }

    /// a home rule violation only counts if the home is known or a home is
    /// required.
    fn home_violation(&self, location: &str) -> bool {
        Some(location) != self.home && (self.home.is_some() || self.rules.require_existing_home)
    }

    fn valid_for_mode(&self, mode: &str, modes: &[String]) -> bool {
        let Some((first, last)) = constraint_ops::first_and_last_index(mode, modes) else {
            return true;
        };
        let (Some(first_trip), Some(last_trip)) = (self.trips.get(first), self.trips.get(last))
        else {
            return true;
        };

        if self.rules.require_start_at_home.contains(mode)
            && self.home_violation(first_trip.origin_activity.location_id())
        {
            return false;
        }

        if self.rules.require_end_at_home.contains(mode)
            && self.home_violation(last_trip.destination_activity.location_id())
        {
            return false;
        }

        if self.rules.require_continuity.contains(mode) {
            let mut vehicle_location = first_trip.destination_activity.location_id();
            for (trip, trip_mode) in self.trips[first + 1..=last]
                .iter()
                .zip(modes[first + 1..=last].iter())
            {
                if trip_mode != mode {
                    continue;
                }
                if trip.origin_activity.location_id() != vehicle_location {
                    return false;
                }
                vehicle_location = trip.destination_activity.location_id();
            }
        }

        true
    }
}

impl TourConstraint for VehicleTourConstraint<'_> {
    fn validate_before_estimation(&self, modes: &[String], _previous_modes: &[Vec<String>]) -> bool {
        self.rules
            .test_modes
            .iter()
            .all(|mode| self.valid_for_mode(mode, modes))
    }
}
