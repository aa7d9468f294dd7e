// src/analysis/anomaly.rs
use crate::model::{Observation, ObservationSet, Price};

use super::stats::{self, Deviation};

pub const DEFAULT_K: f64 = 2.0;

/// The accepted price band `mean ± k·stddev`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnomalyBand {
    pub mean: f64,
    pub stddev: f64,
    pub lower: f64,
    pub upper: f64,
}

impl AnomalyBand {
    pub fn contains(&self, price: Price) -> bool {
        let p = price.as_f64();
        p >= self.lower && p <= self.upper
    }
}

/// Band over the whole set, or `None` below two records.
pub fn band(set: &ObservationSet, k: f64, dev: Deviation) -> Option<AnomalyBand> {
    if set.len() < 2 { return None; }
    let prices: Vec<Price> = set.prices().collect();
    let mean = stats::mean(&prices)?;
    let stddev = stats::std_dev(&prices, dev)?;
    Some(AnomalyBand { mean, stddev, lower: mean - k * stddev, upper: mean + k * stddev })
}

/// Records strictly outside the band, in log order.
/// Fewer than two records: no band, so no anomalies.
pub fn detect_anomalies(set: &ObservationSet, k: f64, dev: Deviation) -> Vec<Observation> {
    let Some(b) = band(set, k, dev) else { return Vec::new() };
    set.iter().filter(|o| !b.contains(o.price)).cloned().collect()
}
