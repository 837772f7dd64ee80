//! Seeded call record store
//!
//! Records are closed-form functions of their index: no randomness, so the
//! same parameters always yield the same dataset.

use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{CallRecord, CallStatus, Channel, Issue, Priority, Region, Sentiment};

/// 2025-10-15T04:00:00Z
const DEFAULT_BASE_EPOCH_SECONDS: i64 = 1_760_500_800;

pub const DEFAULT_RECORD_COUNT: usize = 180;
pub const DEFAULT_INTERVAL_MINUTES: i64 = 37;

const MIN_DURATION_SECONDS: u32 = 240;
const DURATION_SPREAD_SECONDS: usize = 840;
const MAX_DURATION_SECONDS: i64 = MIN_DURATION_SECONDS as i64 + DURATION_SPREAD_SECONDS as i64 - 1;

const AGENTS: [&str; 15] = [
    "Nova Carter",
    "Jaiya Patel",
    "Luca Fern\u{e1}ndez",
    "Maya Chen",
    "Devin Brooks",
    "Riya Kapoor",
    "Oliver Grant",
    "Sora Kim",
    "Iris Bennett",
    "Mateo Silva",
    "Anika Shah",
    "Noah Martinez",
    "Isla Reyes",
    "Theo Laurent",
    "Harper Quinn",
];

/// Parameters for the record generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// Number of records to produce
    pub count: usize,
    /// `opened_at` of the first record
    pub base: DateTime<Utc>,
    /// Spacing between consecutive `opened_at` values
    pub interval_minutes: i64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECORD_COUNT,
            base: default_base(),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
        }
    }
}

impl GenerationParams {
    pub fn with_count(count: usize) -> Self {
        Self { count, ..Self::default() }
    }

    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.count == 0 {
            return Err(AnalyticsError::Config("record count must be positive".to_string()));
        }
        if self.interval_minutes <= 0 {
            return Err(AnalyticsError::Config("record interval must be positive".to_string()));
        }
        // The last record, closed at its longest possible duration, must stay representable.
        let last_close = i64::try_from(self.count - 1)
            .ok()
            .and_then(|last| last.checked_mul(self.interval_minutes))
            .and_then(Duration::try_minutes)
            .and_then(|offset| self.base.checked_add_signed(offset))
            .and_then(|opened| opened.checked_add_signed(Duration::seconds(MAX_DURATION_SECONDS)));
        if last_close.is_none() {
            return Err(AnalyticsError::Config(format!(
                "{} records every {} minutes from {} overflow the supported date range",
                self.count, self.interval_minutes, self.base
            )));
        }
        Ok(())
    }
}

pub fn default_base() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(DEFAULT_BASE_EPOCH_SECONDS)
}

/// Build the record at position `index`.
pub fn generate_record(index: usize, params: &GenerationParams) -> CallRecord {
    let i = index as i64;
    let opened_at = params.base + Duration::minutes(i * params.interval_minutes);
    let duration = MIN_DURATION_SECONDS + ((index * 17) % DURATION_SPREAD_SECONDS) as u32;
    let status = CallStatus::ALL[index % CallStatus::ALL.len()];
    let first_response_minutes = 3 + ((index * 5) % 28) as u32;

    CallRecord {
        id: format!("call_{:04}", index + 1),
        case_id: format!("CASE-{}-{}", 2025 + index / 90, 9000 + index),
        agent: AGENTS[index % AGENTS.len()].to_string(),
        region: Region::ALL[index % Region::ALL.len()],
        channel: Channel::ALL[index % Channel::ALL.len()],
        issue: Issue::ALL[index % Issue::ALL.len()],
        priority: Priority::ALL[index % Priority::ALL.len()],
        sentiment: Sentiment::ALL[(index * 3) % Sentiment::ALL.len()],
        status,
        duration_seconds: duration,
        csat: (74 + (index * 7) % 23) as u8,
        nps_delta: ((i % 7) - 2) as i32 * 3,
        opened_at,
        closed_at: opened_at + Duration::seconds(duration as i64),
        first_response_minutes,
        first_contact_resolution: status == CallStatus::Resolved && first_response_minutes < 12,
    }
}

/// Generate `params.count` records in index order.
pub fn generate_records(params: &GenerationParams) -> Vec<CallRecord> {
    let records: Vec<CallRecord> = (0..params.count)
        .map(|index| generate_record(index, params))
        .collect();
    tracing::debug!("Generated {} call records from {}", records.len(), params.base);
    records
}

static CALLS_DATASET: OnceLock<Vec<CallRecord>> = OnceLock::new();

/// The default dataset, generated once per process.
pub fn calls_dataset() -> &'static [CallRecord] {
    CALLS_DATASET.get_or_init(|| generate_records(&GenerationParams::default()))
}

/// Activity feed head.
pub fn recent_calls(records: &[CallRecord]) -> &[CallRecord] {
    &records[..records.len().min(20)]
}

/// Up to eight calls that ran longer than fifteen minutes.
pub fn long_running_calls(records: &[CallRecord]) -> Vec<CallRecord> {
    records
        .iter()
        .filter(|call| call.duration_seconds > 900)
        .take(8)
        .cloned()
        .collect()
}

pub fn find_call<'a>(records: &'a [CallRecord], id: &str) -> AnalyticsResult<&'a CallRecord> {
    records
        .iter()
        .find(|call| call.id == id)
        .ok_or_else(|| AnalyticsError::CallNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let params = GenerationParams::default();
        let first = generate_records(&params);
        let second = generate_records(&params);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_first_record_fields() {
        let record = generate_record(0, &GenerationParams::default());
        assert_eq!(record.id, "call_0001");
        assert_eq!(record.case_id, "CASE-2025-9000");
        assert_eq!(record.agent, "Nova Carter");
        assert_eq!(record.region, Region::Na);
        assert_eq!(record.channel, Channel::Voice);
        assert_eq!(record.issue, Issue::Billing);
        assert_eq!(record.priority, Priority::Low);
        assert_eq!(record.status, CallStatus::Resolved);
        assert_eq!(record.duration_seconds, 240);
        assert_eq!(record.csat, 74);
        assert_eq!(record.nps_delta, -6);
        assert_eq!(record.first_response_minutes, 3);
        assert!(record.first_contact_resolution);
        assert_eq!(record.opened_at.to_rfc3339(), "2025-10-15T04:00:00+00:00");
    }

    #[test]
    fn test_case_id_rolls_over_every_ninety_records() {
        let params = GenerationParams::default();
        assert_eq!(generate_record(89, &params).case_id, "CASE-2025-9089");
        assert_eq!(generate_record(90, &params).case_id, "CASE-2026-9090");
    }

    #[test]
    fn test_record_invariants_hold() {
        for record in calls_dataset() {
            assert_eq!(
                record.closed_at - record.opened_at,
                Duration::seconds(record.duration_seconds as i64)
            );
            assert!(record.csat <= 100);
            assert_eq!(
                record.first_contact_resolution,
                record.status == CallStatus::Resolved && record.first_response_minutes < 12
            );
        }
    }

    #[test]
    fn test_round_robin_regions() {
        let dataset = calls_dataset();
        assert_eq!(dataset.len(), DEFAULT_RECORD_COUNT);
        for region in Region::ALL {
            assert_eq!(dataset.iter().filter(|c| c.region == region).count(), 36);
        }
    }

    #[test]
    fn test_derived_slices() {
        let dataset = calls_dataset();
        assert_eq!(recent_calls(dataset).len(), 20);

        let long = long_running_calls(dataset);
        assert_eq!(long.len(), 8);
        assert!(long.iter().all(|c| c.duration_seconds > 900));

        assert!(recent_calls(&[]).is_empty());
    }

    #[test]
    fn test_find_call() {
        let dataset = calls_dataset();
        assert_eq!(find_call(dataset, "call_0042").unwrap().case_id, "CASE-2025-9041");
        assert_eq!(
            find_call(dataset, "call_9999"),
            Err(AnalyticsError::CallNotFound("call_9999".to_string()))
        );
    }

    #[test]
    fn test_params_validation() {
        assert!(GenerationParams::default().validate().is_ok());
        assert!(GenerationParams::with_count(0).validate().is_err());
        let params = GenerationParams { interval_minutes: 0, ..GenerationParams::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_params_outside_date_range_are_rejected() {
        let huge_interval = GenerationParams {
            interval_minutes: 100_000_000_000_000,
            ..GenerationParams::default()
        };
        assert!(matches!(huge_interval.validate(), Err(AnalyticsError::Config(_))));

        let near_max = GenerationParams {
            base: DateTime::<Utc>::MAX_UTC - Duration::hours(1),
            ..GenerationParams::default()
        };
        assert!(matches!(near_max.validate(), Err(AnalyticsError::Config(_))));

        // A single record only needs room for its own duration.
        let single = GenerationParams {
            count: 1,
            base: DateTime::<Utc>::MAX_UTC - Duration::hours(1),
            ..GenerationParams::default()
        };
        assert!(single.validate().is_ok());
        assert_eq!(generate_records(&single).len(), 1);
    }
}
