// src/analysis/bands.rs
//
// Distribution views used by the dashboard charts and the report tail:
// price bands, mean price per title, and cheap "deals".

use std::collections::HashMap;

use crate::model::{Observation, ObservationSet, Price};

/// Half-open band `[lo, hi)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandCount {
    pub label: &'static str,
    pub lo: Price,
    pub hi: Price,
    pub count: usize,
}

pub const BANDS: &[(&str, Price, Price)] = &[
    ("<20", Price::new(0, 0), Price::new(20, 0)),
    ("20-40", Price::new(20, 0), Price::new(40, 0)),
    ("40-60", Price::new(40, 0), Price::new(60, 0)),
    ("60-100", Price::new(60, 0), Price::new(100, 0)),
];

/// Count per band in `BANDS` order. Prices outside every band are not counted.
pub fn price_bands(set: &ObservationSet) -> Vec<BandCount> {
    BANDS
        .iter()
        .map(|&(label, lo, hi)| BandCount {
            label,
            lo,
            hi,
            count: set.prices().filter(|p| *p >= lo && *p < hi).count(),
        })
        .collect()
}

/// Mean price per title, highest `n` first; equal means sort by title.
pub fn title_means(set: &ObservationSet, n: usize) -> Vec<(String, f64)> {
    let mut acc: HashMap<&str, (i128, usize)> = HashMap::new();
    for obs in set {
        let e = acc.entry(obs.title.as_str()).or_insert((0, 0));
        e.0 += i128::from(obs.price.minor());
        e.1 += 1;
    }
    let mut means: Vec<(String, f64)> = acc
        .into_iter()
        .map(|(t, (sum, cnt))| (s!(t), sum as f64 / cnt as f64 / 100.0))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    means.truncate(n);
    means
}

/// Records strictly below `below`, cheapest first (stable), at most `n`.
pub fn deals(set: &ObservationSet, below: Price, n: usize) -> Vec<Observation> {
    let mut cheap: Vec<&Observation> = set.iter().filter(|o| o.price < below).collect();
    cheap.sort_by_key(|o| o.price);
    cheap.into_iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_timestamp;

    fn obs(title: &str, units: i64) -> Observation {
        Observation::new(parse_timestamp("2024-01-01").unwrap(), title, Price::new(units, 0))
    }

    #[test]
    fn bands_are_half_open() {
        let set = ObservationSet::from(vec![obs("a", 0), obs("b", 20), obs("c", 59), obs("d", 60), obs("e", 100)]);
        let counts: Vec<usize> = price_bands(&set).iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 1, 1]);
    }

    #[test]
    fn title_means_rank_high_first() {
        let set = ObservationSet::from(vec![obs("a", 10), obs("a", 20), obs("b", 30), obs("c", 15)]);
        let means = title_means(&set, 2);
        assert_eq!(means, vec![(s!("b"), 30.0), (s!("a"), 15.0)]);
    }

    #[test]
    fn deals_are_strictly_below() {
        let set = ObservationSet::from(vec![obs("a", 20), obs("b", 19), obs("c", 5)]);
        let titles: Vec<String> = deals(&set, Price::new(20, 0), 10).into_iter().map(|o| o.title).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }
}
