//! Calls explorer view
//!
//! Works on the filtered rows only. An empty filter yields an empty table and
//! zeroed stats rather than the full-population fallback.

use serde::Serialize;

use crate::models::CallRecord;
use super::percent;

pub const EXPLORER_PAGE_SIZE: usize = 40;
pub const FOCUS_LIST_SIZE: usize = 4;
/// First response target for the explorer SLA stat, in minutes.
pub const FIRST_RESPONSE_TARGET_MINUTES: u32 = 15;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CallsExplorer {
    pub rows: Vec<CallRecord>,
    #[serde(rename = "matchingRows")]
    pub matching_rows: usize,
    #[serde(rename = "longestRunning")]
    pub longest_running: Vec<CallRecord>,
    pub escalations: Vec<CallRecord>,
    #[serde(rename = "sentimentScore")]
    pub sentiment_score: f64,
    pub fcr: f64,
    pub sla: f64,
}

impl CallsExplorer {
    pub fn build(filtered: &[CallRecord]) -> Self {
        let mut longest: Vec<&CallRecord> = filtered.iter().collect();
        longest.sort_by(|a, b| b.duration_seconds.cmp(&a.duration_seconds));

        let sentiment_score = if filtered.is_empty() {
            0.0
        } else {
            let total: i32 = filtered.iter().map(|c| c.sentiment.score()).sum();
            total as f64 / filtered.len() as f64
        };

        Self {
            rows: filtered.iter().take(EXPLORER_PAGE_SIZE).cloned().collect(),
            matching_rows: filtered.len(),
            longest_running: longest.into_iter().take(FOCUS_LIST_SIZE).cloned().collect(),
            escalations: filtered
                .iter()
                .filter(|c| c.is_escalated())
                .take(FOCUS_LIST_SIZE)
                .cloned()
                .collect(),
            sentiment_score,
            fcr: percent(
                filtered.iter().filter(|c| c.first_contact_resolution).count(),
                filtered.len(),
            ),
            sla: percent(
                filtered
                    .iter()
                    .filter(|c| c.first_response_minutes <= FIRST_RESPONSE_TARGET_MINUTES)
                    .count(),
                filtered.len(),
            ),
        }
    }

    /// Focus-card labels such as `CASE-2025-9045 · 14m`.
    pub fn longest_running_labels(&self) -> Vec<String> {
        self.longest_running
            .iter()
            .map(|c| format!("{} \u{b7} {}m", c.case_id, c.duration_minutes().round()))
            .collect()
    }

    pub fn escalation_labels(&self) -> Vec<String> {
        self.escalations
            .iter()
            .map(|c| format!("{} \u{b7} {}", c.case_id, c.region))
            .collect()
    }
}
