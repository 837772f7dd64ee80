//! Runtime configuration
//!
//! Read from environment variables (a `.env` file is loaded first by the
//! binary). Unset variables fall back to the demo defaults.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::data::{default_base, GenerationParams, DEFAULT_INTERVAL_MINUTES, DEFAULT_RECORD_COUNT};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{FilterSelection, IntentFilter, RegionFilter, TimeWindow};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    /// Number of generated call records
    pub record_count: usize,

    /// `opened_at` of the first record
    pub base_date: DateTime<Utc>,

    /// Minutes between consecutive records
    pub interval_minutes: i64,

    /// Selection the filter store starts with
    pub default_selection: FilterSelection,

    /// Simulated latency of a manual refresh
    pub refresh_latency: Duration,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            base_date: default_base(),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            default_selection: FilterSelection::default(),
            refresh_latency: Duration::from_millis(1500),
        }
    }
}

impl AnalyticsConfig {
    /// Create config from environment variables
    pub fn from_env() -> AnalyticsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AnalyticsResult<Self> {
        let defaults = Self::default();

        let record_count = match lookup("ANALYTICS_RECORD_COUNT") {
            Some(raw) => parse_number(&raw, "ANALYTICS_RECORD_COUNT")?,
            None => defaults.record_count,
        };

        let base_date = match lookup("ANALYTICS_BASE_DATE") {
            Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
                .map(|date| date.with_timezone(&Utc))
                .map_err(|e| AnalyticsError::Config(format!("ANALYTICS_BASE_DATE: {}", e)))?,
            None => defaults.base_date,
        };

        let interval_minutes = match lookup("ANALYTICS_INTERVAL_MINUTES") {
            Some(raw) => parse_number(&raw, "ANALYTICS_INTERVAL_MINUTES")?,
            None => defaults.interval_minutes,
        };

        let window = match lookup("ANALYTICS_DEFAULT_WINDOW") {
            Some(raw) => raw.parse::<TimeWindow>()?,
            None => defaults.default_selection.window,
        };
        let region = match lookup("ANALYTICS_DEFAULT_REGION") {
            Some(raw) => raw.parse::<RegionFilter>()?,
            None => defaults.default_selection.region,
        };
        let intent = match lookup("ANALYTICS_DEFAULT_INTENT") {
            Some(raw) => raw.parse::<IntentFilter>()?,
            None => defaults.default_selection.intent,
        };

        let refresh_latency = match lookup("ANALYTICS_REFRESH_LATENCY_MS") {
            Some(raw) => Duration::from_millis(parse_number(&raw, "ANALYTICS_REFRESH_LATENCY_MS")?),
            None => defaults.refresh_latency,
        };

        let config = Self {
            record_count,
            base_date,
            interval_minutes,
            default_selection: FilterSelection::new(window, region, intent),
            refresh_latency,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> AnalyticsResult<()> {
        self.generation_params().validate()
    }

    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            count: self.record_count,
            base: self.base_date,
            interval_minutes: self.interval_minutes,
        }
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, key: &str) -> AnalyticsResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AnalyticsError::Config(format!("{}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::models::Region;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AnalyticsConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AnalyticsConfig::default());
        assert_eq!(config.generation_params(), GenerationParams::default());
    }

    #[test]
    fn test_overrides() {
        let config = AnalyticsConfig::from_lookup(lookup_from(&[
            ("ANALYTICS_RECORD_COUNT", "500"),
            ("ANALYTICS_BASE_DATE", "2025-01-01T00:00:00Z"),
            ("ANALYTICS_INTERVAL_MINUTES", "15"),
            ("ANALYTICS_DEFAULT_WINDOW", "30d"),
            ("ANALYTICS_DEFAULT_REGION", "EMEA"),
            ("ANALYTICS_REFRESH_LATENCY_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.record_count, 500);
        assert_eq!(config.base_date.to_rfc3339(), "2025-01-01T00:00:00+00:00");
        assert_eq!(config.interval_minutes, 15);
        assert_eq!(config.default_selection.window, TimeWindow::Last30Days);
        assert_eq!(config.default_selection.region, RegionFilter::Only(Region::Emea));
        assert_eq!(config.default_selection.intent, IntentFilter::AllIntents);
        assert_eq!(config.refresh_latency, Duration::ZERO);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_count = AnalyticsConfig::from_lookup(lookup_from(&[("ANALYTICS_RECORD_COUNT", "lots")]));
        assert!(matches!(bad_count, Err(AnalyticsError::Config(_))));

        let zero = AnalyticsConfig::from_lookup(lookup_from(&[("ANALYTICS_RECORD_COUNT", "0")]));
        assert!(matches!(zero, Err(AnalyticsError::Config(_))));

        let bad_window = AnalyticsConfig::from_lookup(lookup_from(&[("ANALYTICS_DEFAULT_WINDOW", "1y")]));
        assert_eq!(bad_window, Err(AnalyticsError::InvalidWindow("1y".to_string())));
    }

    #[test]
    fn test_interval_overflowing_the_date_range_is_rejected() {
        let config = AnalyticsConfig::from_lookup(lookup_from(&[(
            "ANALYTICS_INTERVAL_MINUTES",
            "100000000000000",
        )]));
        assert!(matches!(config, Err(AnalyticsError::Config(_))));

        let direct = AnalyticsConfig {
            interval_minutes: 100_000_000_000_000,
            ..AnalyticsConfig::default()
        };
        assert!(matches!(
            crate::Dashboard::from_config(&direct),
            Err(AnalyticsError::Config(_))
        ));
    }
}
