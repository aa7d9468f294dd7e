// src/analysis/changes.rs
use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::model::{Observation, ObservationSet, Price};

/// A price move between two consecutive observations of one title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceChange {
    pub title: String,
    /// When the new price was observed.
    pub timestamp: NaiveDateTime,
    pub previous: Price,
    pub current: Price,
    /// `current - previous`, never zero.
    pub delta: Price,
}

/// Group by title, walk each group in timestamp order and keep every
/// non-zero step. Output is ordered by title, then timestamp.
pub fn detect_changes(set: &ObservationSet) -> Vec<PriceChange> {
    let mut by_title: BTreeMap<&str, Vec<&Observation>> = BTreeMap::new();
    for obs in set {
        by_title.entry(obs.title.as_str()).or_default().push(obs);
    }

    let mut out = Vec::new();
    for (title, mut group) in by_title {
        // Stable: same-instant observations stay in log order.
        group.sort_by_key(|o| o.timestamp);
        for pair in group.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            let delta = curr.price - prev.price;
            if delta.is_zero() { continue; }
            out.push(PriceChange {
                title: s!(title),
                timestamp: curr.timestamp,
                previous: prev.price,
                current: curr.price,
                delta,
            });
        }
    }
    out
}

/// Smallest delta over all changes. `None` only when there are no changes;
/// if every change is an increase, the smallest increase is returned.
pub fn biggest_drop(changes: &[PriceChange]) -> Option<&PriceChange> {
    // min_by_key keeps the first of equal minima
    changes.iter().min_by_key(|c| c.delta)
}

/// Largest delta over all changes. `None` only when there are no changes.
pub fn biggest_increase(changes: &[PriceChange]) -> Option<&PriceChange> {
    changes
        .iter()
        .fold(None, |best: Option<&PriceChange>, c| match best {
            Some(b) if b.delta >= c.delta => Some(b),
            _ => Some(c),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_timestamp;

    fn obs(ts: &str, title: &str, minor: i64) -> Observation {
        Observation::new(parse_timestamp(ts).unwrap(), title, Price::from_minor(minor))
    }

    #[test]
    fn groups_are_sorted_by_timestamp_not_log_order() {
        let set = ObservationSet::from(vec![
            obs("2024-01-03 00:00:00", "B", 900),
            obs("2024-01-01 00:00:00", "B", 1000),
            obs("2024-01-02 00:00:00", "A", 500),
            obs("2024-01-01 00:00:00", "A", 700),
        ]);
        let changes = detect_changes(&set);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].title, "A");
        assert_eq!(changes[0].delta, Price::from_minor(-200));
        assert_eq!(changes[1].title, "B");
        assert_eq!(changes[1].previous, Price::from_minor(1000));
        assert_eq!(changes[1].delta, Price::from_minor(-100));
    }

    #[test]
    fn extremes_span_all_changes() {
        // only increases: the smallest one is still the biggest drop
        let set = ObservationSet::from(vec![
            obs("2024-01-01 00:00:00", "A", 1000),
            obs("2024-01-02 00:00:00", "A", 1300),
            obs("2024-01-01 00:00:00", "B", 500),
            obs("2024-01-02 00:00:00", "B", 600),
        ]);
        let changes = detect_changes(&set);
        assert_eq!(changes.len(), 2);
        let drop = biggest_drop(&changes).unwrap();
        assert_eq!((drop.title.as_str(), drop.delta), ("B", Price::from_minor(100)));
        assert_eq!(biggest_increase(&changes).map(|c| c.delta), Some(Price::from_minor(300)));

        // only drops: the shallowest one is the biggest increase
        let set = ObservationSet::from(vec![
            obs("2024-01-01 00:00:00", "A", 1500),
            obs("2024-01-02 00:00:00", "A", 1300),
            obs("2024-01-03 00:00:00", "A", 1000),
        ]);
        let changes = detect_changes(&set);
        assert_eq!(biggest_drop(&changes).map(|c| c.delta), Some(Price::from_minor(-300)));
        assert_eq!(biggest_increase(&changes).map(|c| c.delta), Some(Price::from_minor(-200)));
    }

    #[test]
    fn ties_keep_the_first_change() {
        let set = ObservationSet::from(vec![
            obs("2024-01-01 00:00:00", "A", 1000),
            obs("2024-01-02 00:00:00", "A", 800),
            obs("2024-01-01 00:00:00", "B", 1000),
            obs("2024-01-02 00:00:00", "B", 800),
        ]);
        let changes = detect_changes(&set);
        assert_eq!(biggest_drop(&changes).map(|c| c.title.as_str()), Some("A"));
    }
}
