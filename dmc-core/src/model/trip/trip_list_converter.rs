use super::{trip_list_ops, Trip};
use crate::model::{
    plan::{Activity, Person, PlanElement},
    ModeChoiceError,
};
use crate::util::{time_ops, warning_limiter::WarningLimiter};
use itertools::Itertools;
use std::sync::Arc;
use uom::si::f64::Time;
use uom::ConstZero;

/// number of undefined-departure warnings written to the log before the
/// converter goes quiet.
pub const DEFAULT_TIMING_WARNING_LIMIT: usize = 100;

/// turns the plan of a person into the ordered list of trips between main
/// activities, each carrying an estimated departure time.
#[derive(Debug, Clone)]
pub struct TripListConverter {
    timing_warnings: Arc<WarningLimiter>,
}

impl Default for TripListConverter {
    fn default() -> Self {
        Self::new(Arc::new(WarningLimiter::new(DEFAULT_TIMING_WARNING_LIMIT)))
    }
}

impl TripListConverter {
    pub fn new(timing_warnings: Arc<WarningLimiter>) -> Self {
        Self { timing_warnings }
    }

    /// extracts the trips of a person.
    ///
    /// the departure time of each trip is taken from the first of
    ///   1. the end time of the origin activity
    ///   2. the departure time of the first leg of the trip
    ///   3. the previous departure time plus the origin activity's maximum
    ///      duration plus the estimated duration of the previous trip
    ///
    /// if none of these apply, the running clock (which starts at midnight)
    /// is used unchanged and a warning is logged.
    pub fn convert(&self, person: &Person) -> Result<Vec<Trip>, ModeChoiceError> {
        let indices = trip_list_ops::main_activity_indices(person)?;
        let person_hash = person.stable_hash();
        let mut trips = Vec::with_capacity(indices.len().saturating_sub(1));

        let mut time = Time::ZERO;
        let mut previous_duration: Option<Time> = None;

        for (index, (origin_idx, destination_idx)) in indices.iter().tuple_windows().enumerate() {
            let origin = activity_at(person, *origin_idx)?;
            let destination = activity_at(person, *destination_idx)?;
            let elements = &person.plan[origin_idx + 1..*destination_idx];
            let first_leg = elements.iter().find_map(PlanElement::as_leg).ok_or_else(|| {
                ModeChoiceError::InternalError(format!(
                    "trip {index} of person '{}' has no legs",
                    person.id
                ))
            })?;

            match (
                origin.end_time,
                first_leg.departure_time,
                origin.max_duration,
                previous_duration,
            ) {
                (Some(end_time), _, _, _) => time = end_time,
                (None, Some(departure_time), _, _) => time = departure_time,
                (None, None, Some(max_duration), Some(duration)) => {
                    time += max_duration + duration;
                }
                _ => {
                    if self.timing_warnings.try_acquire() {
                        log::warn!(
                            "cannot determine departure time of trip {} of person '{}' after activity '{}', using {}",
                            index,
                            person.id,
                            origin.activity_type,
                            time_ops::format_time(&time)
                        );
                        if self.timing_warnings.count() == self.timing_warnings.limit() {
                            log::warn!("further departure time warnings are suppressed");
                        }
                    }
                }
            }

            let routing_mode = first_leg
                .routing_mode
                .clone()
                .unwrap_or_else(|| first_leg.mode.clone());

            trips.push(Trip {
                origin_activity: origin.clone(),
                destination_activity: destination.clone(),
                routing_mode,
                elements: elements.to_vec(),
                departure_time: time,
                person_hash,
                index,
            });

            previous_duration = trip_list_ops::estimate_trip_duration(elements, time);
        }

        Ok(trips)
    }
}

fn activity_at(person: &Person, index: usize) -> Result<&Activity, ModeChoiceError> {
    person
        .plan
        .get(index)
        .and_then(PlanElement::as_activity)
        .ok_or_else(|| {
            ModeChoiceError::InternalError(format!(
                "expected activity at plan element {index} of person '{}'",
                person.id
            ))
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::plan::Leg;
    use crate::util::time_ops::seconds;

    fn departures(trips: &[Trip]) -> Vec<f64> {
        trips
            .iter()
            .map(|t| t.departure_time.get::<uom::si::time::second>())
            .collect()
    }

    #[test]
    fn test_empty_plan() {
        let person = Person::new("p", vec![]);
        let trips = TripListConverter::default()
            .convert(&person)
            .expect("test failed");
        assert!(trips.is_empty());
    }

    #[test]
    fn test_single_activity() {
        let person = Person::new("p", vec![Activity::new("home", "a").into()]);
        let trips = TripListConverter::default()
            .convert(&person)
            .expect("test failed");
        assert!(trips.is_empty());
    }

    #[test]
    fn test_trip_structure() {
        let person = Person::new(
            "p",
            vec![
                Activity::new("home", "a")
                    .with_end_time(seconds(8.0 * 3600.0))
                    .into(),
                Leg::new("walk").with_routing_mode("pt").into(),
                Activity::new("pt interaction", "s").into(),
                Leg::new("pt").with_routing_mode("pt").into(),
                Activity::new("work", "b")
                    .with_end_time(seconds(17.0 * 3600.0))
                    .into(),
                Leg::new("car").into(),
                Activity::new("home", "a").into(),
            ],
        );
        let trips = TripListConverter::default()
            .convert(&person)
            .expect("test failed");
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].routing_mode, "pt");
        assert_eq!(trips[0].elements.len(), 3);
        assert_eq!(trips[0].origin_activity.activity_type, "home");
        assert_eq!(trips[0].destination_activity.activity_type, "work");
        assert_eq!(trips[1].routing_mode, "car");
        assert_eq!(trips[1].index, 1);
        assert_eq!(trips[0].person_hash, trips[1].person_hash);
        assert_eq!(departures(&trips), vec![28800.0, 61200.0]);
    }

    #[test]
    fn test_departure_from_first_leg() {
        let person = Person::new(
            "p",
            vec![
                Activity::new("home", "a").into(),
                Leg::new("car").with_departure_time(seconds(500.0)).into(),
                Activity::new("work", "b").into(),
            ],
        );
        let trips = TripListConverter::default()
            .convert(&person)
            .expect("test failed");
        assert_eq!(departures(&trips), vec![500.0]);
    }

    #[test]
    fn test_departure_from_max_duration_and_previous_trip() {
        let person = Person::new(
            "p",
            vec![
                Activity::new("home", "a")
                    .with_end_time(seconds(1000.0))
                    .into(),
                Leg::new("car").with_travel_time(seconds(300.0)).into(),
                Activity::new("work", "b")
                    .with_max_duration(seconds(3600.0))
                    .into(),
                Leg::new("car").into(),
                Activity::new("home", "a").into(),
            ],
        );
        let trips = TripListConverter::default()
            .convert(&person)
            .expect("test failed");
        assert_eq!(departures(&trips), vec![1000.0, 4900.0]);
    }

    #[test]
    fn test_undefined_departure_keeps_clock_and_warns() {
        let limiter = Arc::new(WarningLimiter::new(100));
        let converter = TripListConverter::new(limiter.clone());
        let person = Person::new(
            "p",
            vec![
                Activity::new("home", "a")
                    .with_end_time(seconds(1000.0))
                    .into(),
                Leg::new("car").into(),
                Activity::new("work", "b")
                    .with_max_duration(seconds(3600.0))
                    .into(),
                Leg::new("car").into(),
                Activity::new("home", "a").into(),
            ],
        );
        let trips = converter.convert(&person).expect("test failed");
        // previous trip has no duration estimate
        assert_eq!(departures(&trips), vec![1000.0, 1000.0]);
        assert_eq!(limiter.count(), 1);
    }

    #[test]
    fn test_first_trip_without_timing_departs_at_midnight() {
        let person = Person::new(
            "p",
            vec![
                Activity::new("home", "a").into(),
                Leg::new("car").into(),
                Activity::new("work", "b").into(),
            ],
        );
        let trips = TripListConverter::default()
            .convert(&person)
            .expect("test failed");
        assert_eq!(departures(&trips), vec![0.0]);
    }

    #[test]
    fn test_invalid_plan() {
        let person = Person::new(
            "p",
            vec![Leg::new("car").into(), Activity::new("work", "b").into()],
        );
        let result = TripListConverter::default().convert(&person);
        assert!(matches!(result, Err(ModeChoiceError::InvalidPlan { .. })));
    }
}
