//! Cosmetic data refresh
//!
//! A refresh only records an event and moves the "last refreshed" timestamp.
//! The record store is never touched.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::data::catalog;
use crate::models::{RefreshEvent, RefreshResult};

#[derive(Debug, Clone)]
pub struct RefreshLog {
    /// Newest first
    history: Vec<RefreshEvent>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl Default for RefreshLog {
    fn default() -> Self {
        Self::new(catalog::refresh_history())
    }
}

impl RefreshLog {
    pub fn new(history: Vec<RefreshEvent>) -> Self {
        Self {
            history,
            last_refreshed: None,
        }
    }

    pub fn history(&self) -> &[RefreshEvent] {
        &self.history
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    fn next_id(&self) -> String {
        let last = self
            .history
            .iter()
            .filter_map(|event| event.id.strip_prefix("refresh_")?.parse::<u64>().ok())
            .max()
            .unwrap_or(1000);
        format!("refresh_{}", last + 1)
    }

    /// Record a successful refresh at `now`.
    pub fn trigger(&mut self, now: DateTime<Utc>, duration_seconds: u32) -> &RefreshEvent {
        let event = RefreshEvent {
            id: self.next_id(),
            timestamp: now,
            result: RefreshResult::Success,
            duration_seconds,
            note: Some("Manual refresh".to_string()),
        };
        tracing::info!("Recorded refresh {} at {}", event.id, now);

        self.last_refreshed = Some(now);
        self.history.insert(0, event);
        &self.history[0]
    }

    /// Wait out the simulated latency, then record the refresh.
    pub async fn simulate(&mut self, latency: Duration) -> RefreshEvent {
        tracing::debug!("Simulating refresh latency of {:?}", latency);
        tokio::time::sleep(latency).await;
        self.trigger(Utc::now(), whole_seconds(latency)).clone()
    }
}

/// Rounded to the nearest second, so 1500 ms reports as 2.
fn whole_seconds(latency: Duration) -> u32 {
    let seconds = (latency.as_millis() as f64 / 1000.0).round();
    seconds.min(u32::MAX as f64) as u32
}
