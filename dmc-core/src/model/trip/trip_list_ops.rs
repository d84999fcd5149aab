use crate::model::{
    plan::{Person, PlanElement},
    ModeChoiceError,
};
use itertools::Itertools;
use uom::si::f64::Time;
use uom::ConstZero;

/// finds the positions of the main activities in a person's plan. consecutive
/// positions enclose the elements of one trip.
///
/// # Errors
///
/// if the plan does not start and end with a main activity, or if two main
/// activities are not separated by at least one leg.
pub fn main_activity_indices(person: &Person) -> Result<Vec<usize>, ModeChoiceError> {
    let plan = &person.plan;
    if plan.is_empty() {
        return Ok(vec![]);
    }
    let indices = plan
        .iter()
        .positions(PlanElement::is_main_activity)
        .collect_vec();
    match (indices.first(), indices.last()) {
        (Some(0), Some(last)) if *last == plan.len() - 1 => {}
        _ => {
            return Err(invalid_plan(
                person,
                "plan must start and end with a main activity",
            ))
        }
    }
    for (origin, destination) in indices.iter().tuple_windows() {
        let has_leg = plan[origin + 1..*destination]
            .iter()
            .any(|e| e.as_leg().is_some());
        if !has_leg {
            let msg = format!("no leg found between plan elements {origin} and {destination}");
            return Err(invalid_plan(person, &msg));
        }
    }
    Ok(indices)
}

/// estimates how long the elements of a trip take when started at `start_time`.
///
/// per element, the first available signal is used: activity end time, then
/// activity maximum duration; leg departure time, then leg travel time. if an
/// element carries none of them, the duration is undefined.
pub fn estimate_trip_duration(elements: &[PlanElement], start_time: Time) -> Option<Time> {
    let mut time = start_time;
    for element in elements.iter() {
        match element {
            PlanElement::Activity(activity) => match (activity.end_time, activity.max_duration) {
                (Some(end_time), _) => time = end_time,
                (None, Some(max_duration)) => time += max_duration,
                (None, None) => return None,
            },
            PlanElement::Leg(leg) => match (leg.departure_time, leg.travel_time) {
                (Some(departure_time), _) => time = departure_time,
                (None, Some(travel_time)) => time += travel_time,
                (None, None) => return None,
            },
        }
    }
    let duration = time - start_time;
    if duration < Time::ZERO {
        Some(Time::ZERO)
    } else {
        Some(duration)
    }
}

/// replaces the elements of every trip in the plan, keeping the main
/// activities in place. `replacements` must hold one non-empty element list
/// per trip, in trip order. the plan is left untouched on error.
pub fn replace_trip_elements(
    person: &mut Person,
    replacements: Vec<Vec<PlanElement>>,
) -> Result<(), ModeChoiceError> {
    let indices = main_activity_indices(person)?;
    let n_trips = indices.len().saturating_sub(1);
    if replacements.len() != n_trips {
        return Err(ModeChoiceError::InternalError(format!(
            "person '{}' has {n_trips} trips but {} replacements were provided",
            person.id,
            replacements.len()
        )));
    }
    if let Some(empty) = replacements.iter().position(Vec::is_empty) {
        return Err(ModeChoiceError::InternalError(format!(
            "replacement for trip {empty} of person '{}' has no elements",
            person.id
        )));
    }

    let n_elements = indices.len() + replacements.iter().map(Vec::len).sum::<usize>();
    let mut plan = Vec::with_capacity(n_elements);
    let mut replacements = replacements.into_iter();
    for activity_index in indices.iter() {
        plan.push(person.plan[*activity_index].clone());
        if let Some(elements) = replacements.next() {
            plan.extend(elements);
        }
    }
    person.plan = plan;
    Ok(())
}

fn invalid_plan(person: &Person, message: &str) -> ModeChoiceError {
    ModeChoiceError::InvalidPlan {
        person_id: person.id.clone(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::plan::{Activity, Leg};
    use crate::util::time_ops::seconds;

    fn simple_person() -> Person {
        Person::new(
            "p",
            vec![
                Activity::new("home", "a").into(),
                Leg::new("car").into(),
                Activity::new("work", "b").into(),
                Leg::new("walk").into(),
                Activity::new("pt interaction", "s").into(),
                Leg::new("pt").into(),
                Activity::new("home", "a").into(),
            ],
        )
    }

    #[test]
    fn test_main_activity_indices() {
        let indices = main_activity_indices(&simple_person()).expect("test failed");
        assert_eq!(indices, vec![0, 2, 6]);
    }

    #[test]
    fn test_empty_plan_has_no_trips() {
        let person = Person::new("p", vec![]);
        assert!(main_activity_indices(&person).expect("test failed").is_empty());
    }

    #[test]
    fn test_plan_ending_with_leg_is_invalid() {
        let person = Person::new(
            "p",
            vec![Activity::new("home", "a").into(), Leg::new("car").into()],
        );
        let result = main_activity_indices(&person);
        assert!(matches!(result, Err(ModeChoiceError::InvalidPlan { .. })));
    }

    #[test]
    fn test_adjacent_activities_are_invalid() {
        let person = Person::new(
            "p",
            vec![
                Activity::new("home", "a").into(),
                Activity::new("pt interaction", "s").into(),
                Activity::new("work", "b").into(),
            ],
        );
        let result = main_activity_indices(&person);
        assert!(matches!(result, Err(ModeChoiceError::InvalidPlan { .. })));
    }

    #[test]
    fn test_duration_accumulates_travel_times() {
        let elements: Vec<PlanElement> = vec![
            Leg::new("walk").with_travel_time(seconds(120.0)).into(),
            Activity::new("pt interaction", "s")
                .with_max_duration(seconds(0.0))
                .into(),
            Leg::new("pt").with_travel_time(seconds(600.0)).into(),
        ];
        let duration = estimate_trip_duration(&elements, seconds(1000.0));
        assert_eq!(duration, Some(seconds(720.0)));
    }

    #[test]
    fn test_duration_uses_explicit_times_first() {
        let elements: Vec<PlanElement> = vec![
            Leg::new("walk")
                .with_departure_time(seconds(1100.0))
                .with_travel_time(seconds(9999.0))
                .into(),
            Activity::new("pt interaction", "s")
                .with_end_time(seconds(1300.0))
                .into(),
            Leg::new("pt").with_travel_time(seconds(200.0)).into(),
        ];
        let duration = estimate_trip_duration(&elements, seconds(1000.0));
        assert_eq!(duration, Some(seconds(500.0)));
    }

    #[test]
    fn test_duration_undefined_without_timing() {
        let elements: Vec<PlanElement> = vec![
            Leg::new("walk").with_travel_time(seconds(120.0)).into(),
            Activity::new("pt interaction", "s").into(),
            Leg::new("pt").with_travel_time(seconds(600.0)).into(),
        ];
        assert_eq!(estimate_trip_duration(&elements, seconds(0.0)), None);
    }

    #[test]
    fn test_duration_never_negative() {
        let elements: Vec<PlanElement> =
            vec![Leg::new("car").with_departure_time(seconds(10.0)).into()];
        assert_eq!(
            estimate_trip_duration(&elements, seconds(100.0)),
            Some(seconds(0.0))
        );
    }

    #[test]
    fn test_replace_trip_elements() {
        let mut person = simple_person();
        let replacements = vec![
            vec![Leg::new("bike").into()],
            vec![Leg::new("car").into()],
        ];
        replace_trip_elements(&mut person, replacements).expect("test failed");
        let modes = person
            .plan
            .iter()
            .filter_map(PlanElement::as_leg)
            .map(|l| l.mode.as_str())
            .collect_vec();
        assert_eq!(modes, vec!["bike", "car"]);
        assert_eq!(person.plan.len(), 5);
        assert_eq!(main_activity_indices(&person).expect("test failed"), vec![0, 2, 4]);
    }

    #[test]
    fn test_replace_with_wrong_count_leaves_plan() {
        let mut person = simple_person();
        let before = person.plan.clone();
        let result = replace_trip_elements(&mut person, vec![vec![Leg::new("bike").into()]]);
        assert!(result.is_err());
        assert_eq!(person.plan, before);
    }
}
