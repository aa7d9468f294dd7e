// src/analysis/duplicates.rs
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::model::{Observation, ObservationSet, Price};

type Key<'a> = (&'a NaiveDateTime, &'a str, Price);

fn key(o: &Observation) -> Key<'_> {
    (&o.timestamp, o.title.as_str(), o.price)
}

fn counts(set: &ObservationSet) -> HashMap<Key<'_>, usize> {
    let mut counts = HashMap::new();
    for obs in set {
        *counts.entry(key(obs)).or_insert(0) += 1;
    }
    counts
}

/// Every member of every duplicate group (not only the repeats), in log order.
pub fn find_duplicates(set: &ObservationSet) -> Vec<Observation> {
    let counts = counts(set);
    set.iter()
        .filter(|o| counts.get(&key(o)).copied().unwrap_or(0) > 1)
        .cloned()
        .collect()
}

/// Number of distinct (timestamp, title, price) triples that repeat.
pub fn duplicate_group_count(set: &ObservationSet) -> usize {
    counts(set).values().filter(|&&n| n > 1).count()
}
