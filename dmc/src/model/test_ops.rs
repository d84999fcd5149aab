use dmc_core::{
    model::{
        plan::{Activity, Leg, Person, PlanElement},
        trip::Trip,
    },
    util::time_ops::seconds,
};

/// one walk trip between each pair of consecutive (activity type, location)
/// entries.
pub fn trips_between(activities: &[(&str, &str)]) -> Vec<Trip> {
    activities
        .windows(2)
        .enumerate()
        .map(|(index, pair)| Trip {
            origin_activity: Activity::new(pair[0].0, pair[0].1),
            destination_activity: Activity::new(pair[1].0, pair[1].1),
            routing_mode: String::from("walk"),
            elements: vec![Leg::new("walk").into()],
            departure_time: seconds(7.0 * 3600.0 + index as f64 * 3600.0),
            person_hash: 0,
            index,
        })
        .collect()
}

/// a person visiting (activity type, location, x, y) in order, using
/// `mode` for every trip. activities end every two hours from 08:00.
pub fn person_visiting(id: &str, activities: &[(&str, &str, f64, f64)], mode: &str) -> Person {
    let mut plan: Vec<PlanElement> = vec![];
    for (index, (activity_type, location, x, y)) in activities.iter().enumerate() {
        let mut activity = Activity::new(activity_type, location).with_coord(*x, *y);
        if index + 1 < activities.len() {
            activity = activity.with_end_time(seconds(8.0 * 3600.0 + index as f64 * 7200.0));
        }
        if index > 0 {
            plan.push(Leg::new(mode).into());
        }
        plan.push(activity.into());
    }
    Person::new(id, plan)
}
