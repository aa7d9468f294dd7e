// src/model.rs
//
// Strongly typed price-log records.
//
// - Price:          fixed-point money in minor units (pence/cents).
// - Observation:    one logged (timestamp, title, price) row.
// - ObservationSet: the full log, or a filtered view of it, in append order.

use std::fmt;
use std::ops::Sub;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format the scraper writes timestamps in.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Money in hundredths. Also used for signed deltas between two prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const fn from_minor(minor: i64) -> Self { Price(minor) }

    /// Whole units plus hundredths, e.g. `Price::new(51, 77)` is 51.77.
    pub const fn new(units: i64, hundredths: i64) -> Self { Price(units * 100 + hundredths) }

    /// Round to the nearest hundredth. Non-finite input has no price.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() { return None; }
        let minor = (value * 100.0).round();
        if minor.abs() > i64::MAX as f64 { return None; }
        Some(Price(minor as i64))
    }

    /// Parse decimal text as written in the log ("51.77", "52", "52.5").
    pub fn parse(text: &str) -> Option<Self> {
        let t = text.trim();
        if t.is_empty() { return None; }
        t.parse::<f64>().ok().and_then(Self::from_f64)
    }

    pub fn minor(self) -> i64 { self.0 }

    pub fn as_f64(self) -> f64 { self.0 as f64 / 100.0 }

    pub fn is_negative(self) -> bool { self.0 < 0 }

    pub fn is_zero(self) -> bool { self.0 == 0 }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Sub for Price {
    type Output = Price;
    fn sub(self, rhs: Price) -> Price { Price(self.0 - rhs.0) }
}

/// Accepts what the scraper writes plus the usual ISO-8601 variants.
/// A bare date means midnight.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let t = text.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(ts);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.naive_utc());
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// One logged price. Never mutated after capture.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub title: String,
    pub price: Price,
}

impl Observation {
    pub fn new(timestamp: NaiveDateTime, title: impl Into<String>, price: Price) -> Self {
        Self { timestamp, title: title.into(), price }
    }

    pub fn date(&self) -> NaiveDate { self.timestamp.date() }

    /// Row in log column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![format_timestamp(&self.timestamp), self.title.clone(), self.price.to_string()]
    }
}

/// Ordered collection of observations; order is append order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObservationSet {
    items: Vec<Observation>,
}

impl ObservationSet {
    pub fn new() -> Self { Self { items: Vec::new() } }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> { self.items.iter() }

    pub fn as_slice(&self) -> &[Observation] { &self.items }

    pub fn push(&mut self, obs: Observation) { self.items.push(obs); }

    pub fn prices(&self) -> impl Iterator<Item = Price> + '_ {
        self.items.iter().map(|o| o.price)
    }

    /// Earliest and latest timestamps, if any.
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let min = self.items.iter().map(|o| o.timestamp).min()?;
        let max = self.items.iter().map(|o| o.timestamp).max()?;
        Some((min, max))
    }

    /// Lowest and highest prices, if any.
    pub fn price_span(&self) -> Option<(Price, Price)> {
        let min = self.prices().min()?;
        let max = self.prices().max()?;
        Some((min, max))
    }

}

impl From<Vec<Observation>> for ObservationSet {
    fn from(items: Vec<Observation>) -> Self { Self { items } }
}

impl FromIterator<Observation> for ObservationSet {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_parse_and_display() {
        assert_eq!(Price::parse("51.77"), Some(Price::new(51, 77)));
        assert_eq!(Price::parse(" 52 "), Some(Price::new(52, 0)));
        assert_eq!(Price::parse("52.5").map(|p| p.to_string()), Some(s!("52.50")));
        assert_eq!(Price::parse("abc"), None);
        assert_eq!(Price::parse(""), None);
        assert_eq!((Price::new(10, 0) - Price::new(12, 5)).to_string(), "-2.05");
    }

    #[test]
    fn timestamp_variants() {
        let want = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(12, 30, 5).unwrap();
        assert_eq!(parse_timestamp("2024-03-01 12:30:05"), Some(want));
        assert_eq!(parse_timestamp("2024-03-01T12:30:05"), Some(want));
        assert_eq!(parse_timestamp("2024-03-01T12:30:05Z"), Some(want));
        assert_eq!(
            parse_timestamp("2024-03-01"),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
