// src/analysis/stats.rs
use std::collections::HashSet;

use crate::model::{ObservationSet, Price};

/// Which divisor a standard deviation uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Deviation {
    /// Divide by n. Defined for n >= 1.
    #[default]
    Population,
    /// Divide by n - 1. Defined for n >= 2.
    Sample,
}

/// Summary of a record set. `prices` is `None` when the set is empty:
/// there is no mean/min/max/median to report, and that is not zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub unique_titles: usize,
    pub prices: Option<PriceSummary>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceSummary {
    pub mean: f64,
    pub min: Price,
    pub max: Price,
    pub median: f64,
    /// Sample (n - 1) standard deviation; `None` for a single record.
    pub stddev: Option<f64>,
}

pub fn summarize(set: &ObservationSet) -> Stats {
    let unique_titles = set.iter().map(|o| o.title.as_str()).collect::<HashSet<_>>().len();
    let prices: Vec<Price> = set.prices().collect();

    Stats {
        count: prices.len(),
        unique_titles,
        prices: summarize_prices(&prices),
    }
}

fn summarize_prices(prices: &[Price]) -> Option<PriceSummary> {
    let mean = mean(prices)?;
    let min = *prices.iter().min()?;
    let max = *prices.iter().max()?;
    Some(PriceSummary {
        mean,
        min,
        max,
        median: median(prices)?,
        stddev: std_dev(prices, Deviation::Sample),
    })
}

pub fn mean(prices: &[Price]) -> Option<f64> {
    if prices.is_empty() { return None; }
    // an i64 sum can overflow
    let total: i128 = prices.iter().map(|p| i128::from(p.minor())).sum();
    Some(total as f64 / prices.len() as f64 / 100.0)
}

/// Middle value; the average of the two middle values for even counts.
pub fn median(prices: &[Price]) -> Option<f64> {
    if prices.is_empty() { return None; }
    let mut sorted = prices.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    let mid = if n % 2 == 0 {
        (sorted[n / 2 - 1].as_f64() + sorted[n / 2].as_f64()) / 2.0
    } else {
        sorted[n / 2].as_f64()
    };
    Some(mid)
}

pub fn std_dev(prices: &[Price], dev: Deviation) -> Option<f64> {
    let n = prices.len();
    let divisor = match dev {
        Deviation::Population if n >= 1 => n as f64,
        Deviation::Sample if n >= 2 => (n - 1) as f64,
        _ => return None,
    };
    let m = mean(prices)?;
    let ss: f64 = prices.iter().map(|p| (p.as_f64() - m).powi(2)).sum();
    Some((ss / divisor).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(units: i64) -> Price { Price::new(units, 0) }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(median(&[p(3), p(1), p(2)]), Some(2.0));
        assert_eq!(median(&[p(4), p(1), p(2), p(3)]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn deviation_conventions() {
        let xs = [p(2), p(4), p(4), p(4), p(5), p(5), p(7), p(9)];
        assert!((std_dev(&xs, Deviation::Population).unwrap() - 2.0).abs() < 1e-9);
        let sample = std_dev(&xs, Deviation::Sample).unwrap();
        assert!((sample - (32.0f64 / 7.0).sqrt()).abs() < 1e-9);
        assert_eq!(std_dev(&[p(1)], Deviation::Sample), None);
        assert_eq!(std_dev(&[p(1)], Deviation::Population), Some(0.0));
    }
}
