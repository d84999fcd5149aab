use std::collections::HashMap;

/// number of trips per mode in a chain.
pub fn count_modes(modes: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for mode in modes.iter() {
        counts
            .entry(mode.as_str())
            .and_modify(|cnt| *cnt += 1)
            .or_insert(1);
    }
    counts
}

/// true if no mode exceeds its limit. modes without a limit are unrestricted.
pub fn valid_mode_counts(counts: &HashMap<&str, usize>, limits: &HashMap<String, usize>) -> bool {
    for (mode, observed) in counts.iter() {
        match limits.get(*mode) {
            Some(limit) if observed > limit => return false,
            _ => { /* no op */ }
        }
    }
    true
}

/// first and last position of `mode` in the chain.
pub fn first_and_last_index(mode: &str, modes: &[String]) -> Option<(usize, usize)> {
    let first = modes.iter().position(|m| m == mode)?;
    let last = modes.iter().rposition(|m| m == mode)?;
    Some((first, last))
}

#[cfg(test)]
mod test {
    use super::*;

    fn chain(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mode_counts() {
        let modes = chain(&["car", "walk", "car"]);
        let counts = count_modes(&modes);
        let limits = HashMap::from([(String::from("car"), 2)]);
        assert!(valid_mode_counts(&counts, &limits));
        let limits = HashMap::from([(String::from("car"), 1)]);
        assert!(!valid_mode_counts(&counts, &limits));
    }

    #[test]
    fn test_first_and_last_index() {
        let modes = chain(&["walk", "car", "walk", "car", "pt"]);
        assert_eq!(first_and_last_index("car", &modes), Some((1, 3)));
        assert_eq!(first_and_last_index("pt", &modes), Some((4, 4)));
        assert_eq!(first_and_last_index("bike", &modes), None);
    }
}
