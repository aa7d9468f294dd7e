// src/analysis/filter.rs
use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{Observation, ObservationSet, Price};

/// One end of a date range.
///
/// `At` compares full timestamps (an end bound of `2024-01-05 00:00:00`
/// excludes later that day). `On` compares calendar days only, which is what
/// a date picker means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateBound {
    At(NaiveDateTime),
    On(NaiveDate),
}

impl DateBound {
    fn admits_as_start(&self, ts: &NaiveDateTime) -> bool {
        match self {
            DateBound::At(t) => ts >= t,
            DateBound::On(d) => ts.date() >= *d,
        }
    }

    fn admits_as_end(&self, ts: &NaiveDateTime) -> bool {
        match self {
            DateBound::At(t) => ts <= t,
            DateBound::On(d) => ts.date() <= *d,
        }
    }
}

/// Independently optional predicates, combined with AND.
/// `None` (or an empty title) means no constraint on that dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title: Option<String>,
    pub price_min: Option<Price>,
    pub price_max: Option<Price>,
    pub date_start: Option<DateBound>,
    pub date_end: Option<DateBound>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.title.as_deref().is_none_or(str::is_empty)
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.date_start.is_none()
            && self.date_end.is_none()
    }

    pub fn matches(&self, obs: &Observation) -> bool {
        self.matches_with(obs, self.title.as_deref().map(str::to_lowercase).as_deref())
    }

    // `needle` is the lowercased title filter, computed once per `apply`.
    fn matches_with(&self, obs: &Observation, needle: Option<&str>) -> bool {
        if let Some(n) = needle {
            if !n.is_empty() && !obs.title.to_lowercase().contains(n) {
                return false;
            }
        }
        if self.price_min.is_some_and(|min| obs.price < min) { return false; }
        if self.price_max.is_some_and(|max| obs.price > max) { return false; }
        if let Some(b) = &self.date_start {
            if !b.admits_as_start(&obs.timestamp) { return false; }
        }
        if let Some(b) = &self.date_end {
            if !b.admits_as_end(&obs.timestamp) { return false; }
        }
        true
    }
}

/// Subset of `set` matching `criteria`, order preserved.
pub fn apply(set: &ObservationSet, criteria: &FilterCriteria) -> ObservationSet {
    if criteria.is_empty() {
        return set.clone();
    }
    let needle = criteria.title.as_deref().map(str::to_lowercase);
    set.iter()
        .filter(|o| criteria.matches_with(o, needle.as_deref()))
        .cloned()
        .collect()
}
