// src/analysis/ranking.rs
use crate::model::{Observation, ObservationSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// First `n` records by price. The sort is stable, so records with equal
/// prices keep their log order (a partial "smallest-k" would not).
pub fn top_n(set: &ObservationSet, n: usize, order: Order) -> Vec<Observation> {
    let mut ranked: Vec<&Observation> = set.iter().collect();
    match order {
        Order::Asc => ranked.sort_by(|a, b| a.price.cmp(&b.price)),
        Order::Desc => ranked.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    ranked.into_iter().take(n).cloned().collect()
}

pub fn cheapest(set: &ObservationSet, n: usize) -> Vec<Observation> {
    top_n(set, n, Order::Asc)
}

pub fn priciest(set: &ObservationSet, n: usize) -> Vec<Observation> {
    top_n(set, n, Order::Desc)
}

/// Latest `n` records, newest first; equal timestamps keep log order.
pub fn most_recent_n(set: &ObservationSet, n: usize) -> Vec<Observation> {
    let mut ranked: Vec<&Observation> = set.iter().collect();
    ranked.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    ranked.into_iter().take(n).cloned().collect()
}
