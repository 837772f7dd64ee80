//! Error types for the analytics crate

use thiserror::Error;

/// Errors surfaced by filter parsing, lookups and configuration.
///
/// Aggregators never fail; only inputs crossing a string boundary can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Invalid time window: {0} (expected one of 24h, 3d, 7d, 30d, 90d)")]
    InvalidWindow(String),

    #[error("Invalid region: {0} (expected Global, NA, EMEA, APAC, LATAM or ANZ)")]
    InvalidRegion(String),

    #[error("Invalid intent: {0}")]
    InvalidIntent(String),

    #[error("Call not found: {0}")]
    CallNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
