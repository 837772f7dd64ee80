//! Support Analytics
//!
//! Contact-center dashboard derivations over a seeded, in-memory call
//! dataset: a record store, a filter selection store, a stable filter engine
//! and the aggregators that turn the filtered rows into KPI cards, volume
//! series, issue, region and channel breakdowns.

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod models;
pub mod state;

pub use config::AnalyticsConfig;
pub use dashboard::Dashboard;
pub use error::{AnalyticsError, AnalyticsResult};
