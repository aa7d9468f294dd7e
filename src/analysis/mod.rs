// src/analysis/mod.rs
//! # Price-log analysis engine
//!
//! Pure functions over an [`ObservationSet`](crate::model::ObservationSet).
//! Nothing here does I/O or keeps state between calls; every derived value
//! (changes, daily rollups, anomaly and duplicate sets) is recomputed from the
//! set it is given.
//!
//! ## Flow
//! ```text
//! store::load → filter::apply → { stats, ranking, changes, daily, anomaly, duplicates, bands }
//! ```
//!
//! ## Undefined vs. empty
//! - Statistics that have no value on empty (or single-record) input are
//!   `Option`s. They are never reported as `0.0` or `NaN`.
//! - "Nothing qualifies" (no changes, no anomalies, no duplicates) is an empty
//!   `Vec` or `None` from the extremal queries, not an error.
//!
//! Both the CLI report and the dashboard call into this module; neither
//! re-implements an analysis.

pub mod anomaly;
pub mod bands;
pub mod changes;
pub mod daily;
pub mod duplicates;
pub mod filter;
pub mod ranking;
pub mod stats;

pub use anomaly::{detect_anomalies, AnomalyBand};
pub use bands::{deals, price_bands, title_means, BandCount};
pub use changes::{biggest_drop, biggest_increase, detect_changes, PriceChange};
pub use daily::{daily_aggregate, DailyAggregate};
pub use duplicates::find_duplicates;
pub use filter::{apply as filter, DateBound, FilterCriteria};
pub use ranking::{most_recent_n, top_n, Order};
pub use stats::{summarize, Deviation, PriceSummary, Stats};
