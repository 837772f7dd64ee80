//! Filter engine and aggregators
//!
//! Everything here is a pure function over a record slice. Aggregators take
//! both the filtered subset and the full dataset: when the filter leaves no
//! rows they fall back to the full population instead of producing an empty
//! dashboard.

pub mod filtering;
pub mod kpis;
pub mod volume;
pub mod issues;
pub mod regions;
pub mod channels;
pub mod explorer;


pub use filtering::*;
pub use kpis::*;
pub use volume::*;
pub use issues::*;
pub use regions::*;
pub use channels::*;
pub use explorer::*;

use crate::models::CallRecord;

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `count / total` as a percentage; zero when `total` is zero.
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// The rows an aggregator should work on.
pub fn effective_set<'a>(filtered: &'a [CallRecord], full: &'a [CallRecord]) -> &'a [CallRecord] {
    if filtered.is_empty() {
        tracing::debug!("Filtered view is empty, falling back to {} records", full.len());
        full
    } else {
        filtered
    }
}
