use super::{TripCandidate, UtilityCandidate};

/// one estimated mode chain for a tour. trip candidates follow the order of
/// the trips in the tour.
#[derive(Debug, Clone, PartialEq)]
pub struct TourCandidate {
    pub utility: f64,
    pub trip_candidates: Vec<TripCandidate>,
}

impl TourCandidate {
    /// builds a tour candidate whose utility is the sum of its trips.
    pub fn cumulative(trip_candidates: Vec<TripCandidate>) -> TourCandidate {
        let utility = trip_candidates.iter().map(|c| c.utility).sum();
        TourCandidate {
            utility,
            trip_candidates,
        }
    }

    pub fn modes(&self) -> Vec<String> {
        self.trip_candidates.iter().map(|c| c.mode.clone()).collect()
    }
}

impl UtilityCandidate for TourCandidate {
    fn utility(&self) -> f64 {
        self.utility
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cumulative_utility() {
        let tour = TourCandidate::cumulative(vec![
            TripCandidate::new("car", -1.5, None, vec![]),
            TripCandidate::new("walk", -2.0, None, vec![]),
        ]);
        assert_eq!(tour.utility(), -3.5);
        assert_eq!(tour.modes(), vec!["car", "walk"]);
    }

    #[test]
    fn test_empty_tour_has_zero_utility() {
        let tour = TourCandidate::cumulative(vec![]);
        assert_eq!(tour.utility, 0.0);
    }
}
