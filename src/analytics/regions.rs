use crate::models::{CallRecord, RegionPerformanceEntry};
use super::effective_set;

const CSAT_BASE: f64 = 78.0;
const CSAT_CEILING: f64 = 97.0;
const SLA_BASE: f64 = 88.0;
const SLA_CEILING: f64 = 98.0;

/// Per-region volume, CSAT, SLA and escalations, busiest region first.
///
/// CSAT and SLA start from fixed baselines and drift by a small oscillation
/// keyed on each record's position in the population.
pub fn build_region_performance(
    filtered: &[CallRecord],
    full: &[CallRecord],
) -> Vec<RegionPerformanceEntry> {
    let records = effective_set(filtered, full);

    let mut entries: Vec<RegionPerformanceEntry> = Vec::new();
    for (index, call) in records.iter().enumerate() {
        let position = match entries.iter().position(|e| e.region == call.region) {
            Some(position) => position,
            None => {
                entries.push(RegionPerformanceEntry {
                    region: call.region,
                    volume: 0,
                    csat: CSAT_BASE,
                    sla: SLA_BASE,
                    escalations: 0,
                });
                entries.len() - 1
            }
        };

        let entry = &mut entries[position];
        entry.volume += 1;
        entry.csat = (entry.csat + ((index % 5) as f64 - 2.0) * 0.3).min(CSAT_CEILING);
        entry.sla = (entry.sla + ((index % 7) as f64 - 3.0) * 0.4).min(SLA_CEILING);
        if call.is_escalated() {
            entry.escalations += 1;
        }
    }

    entries.sort_by(|a, b| b.volume.cmp(&a.volume));
    entries
}
