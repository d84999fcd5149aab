use skiplist::OrderedSkipList;
use uom::si::f64::Time;

/// a schedule contains an ordered list of [`Departure`] values.
pub type Schedule = OrderedSkipList<Departure>;

/// a single departure of a vehicle from the first stop of a transit route.
#[derive(Debug, Clone, Copy)]
pub struct Departure {
    pub departure_time: Time,
}

impl Departure {
    pub fn new(departure_time: Time) -> Self {
        Self { departure_time }
    }

    /// builds the search key for skiplist queries.
    pub fn construct_query(time: Time) -> Self {
        Self::new(time)
    }
}

impl PartialEq for Departure {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Departure {}

impl PartialOrd for Departure {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Departure {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.departure_time
            .value
            .total_cmp(&other.departure_time.value)
    }
}
