// src/analysis/daily.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{ObservationSet, Price};

/// Per-calendar-day rollup of logged prices.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub min: Price,
    pub max: Price,
    pub mean: f64,
    pub count: usize,
}

struct Acc {
    min: Price,
    max: Price,
    sum_minor: i128,
    count: usize,
}

/// One entry per date present in `set`, ascending by date.
pub fn daily_aggregate(set: &ObservationSet) -> Vec<DailyAggregate> {
    let mut days: BTreeMap<NaiveDate, Acc> = BTreeMap::new();
    for obs in set {
        days.entry(obs.date())
            .and_modify(|a| {
                a.min = a.min.min(obs.price);
                a.max = a.max.max(obs.price);
                a.sum_minor += i128::from(obs.price.minor());
                a.count += 1;
            })
            .or_insert(Acc { min: obs.price, max: obs.price, sum_minor: i128::from(obs.price.minor()), count: 1 });
    }

    days.into_iter()
        .map(|(date, a)| DailyAggregate {
            date,
            min: a.min,
            max: a.max,
            mean: a.sum_minor as f64 / a.count as f64 / 100.0,
            count: a.count,
        })
        .collect()
}
