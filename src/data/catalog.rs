//! Static dashboard content: insight cards, settings diagnostics, refresh
//! history, SLA trend and automation programs.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    AutomationProgram, InsightCard, RefreshEvent, RefreshResult, Severity, SettingsDiagnostic,
    SlaTrendPoint,
};

fn at_epoch(seconds: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(seconds)
}

pub fn proactive_insights() -> Vec<InsightCard> {
    vec![
        InsightCard {
            title: "Voice volume spiked in EMEA".to_string(),
            detail: "37% WoW increase tied to carrier migrations. NOC already deployed traffic shaping.".to_string(),
            action: "Review carrier routing table".to_string(),
            severity: Severity::Warning,
        },
        InsightCard {
            title: "Billing chat backlog cleared".to_string(),
            detail: "Queue wait dropped below 60s after AI deflection update shipped last night.".to_string(),
            action: "Extend intent model to refund flows".to_string(),
            severity: Severity::Info,
        },
        InsightCard {
            title: "Security escalations contained".to_string(),
            detail: "Only 3 escalations triggered in last 24h; still above baseline but trending downward.".to_string(),
            action: "Keep purple team on-call until Friday".to_string(),
            severity: Severity::Critical,
        },
    ]
}

pub fn diagnostics() -> Vec<SettingsDiagnostic> {
    let entry = |label: &str, value: &str, hint: &str| SettingsDiagnostic {
        label: label.to_string(),
        value: value.to_string(),
        hint: Some(hint.to_string()),
    };

    vec![
        entry("Manifest hash", "0x4f8e-91c2", "Matches ETL output from Nov 24"),
        entry("Parquet size", "4.18 MB", "425k rows / 42 columns"),
        entry("Last refresh", "2025-11-24 05:17 UTC", "Triggered automatically via cron"),
        entry("Data source", "Local Parquet (Glue sim)", "Flip DATA_SOURCE=s3 during migration"),
    ]
}

/// Seeded refresh history, newest first.
pub fn refresh_history() -> Vec<RefreshEvent> {
    vec![
        RefreshEvent {
            id: "refresh_1052".to_string(),
            timestamp: at_epoch(1_763_961_420),
            result: RefreshResult::Success,
            duration_seconds: 146,
            note: Some("Daily schedule".to_string()),
        },
        RefreshEvent {
            id: "refresh_1051".to_string(),
            timestamp: at_epoch(1_763_875_020),
            result: RefreshResult::Success,
            duration_seconds: 153,
            note: None,
        },
        RefreshEvent {
            id: "refresh_1050".to_string(),
            timestamp: at_epoch(1_763_788_620),
            result: RefreshResult::Partial,
            duration_seconds: 312,
            note: Some("Manifest checksum mismatch".to_string()),
        },
        RefreshEvent {
            id: "refresh_1049".to_string(),
            timestamp: at_epoch(1_763_729_040),
            result: RefreshResult::Failed,
            duration_seconds: 88,
            note: Some("Parquet write lock".to_string()),
        },
    ]
}

pub fn sla_trend() -> Vec<SlaTrendPoint> {
    [("Week -3", 94.2, 62), ("Week -2", 95.1, 54), ("Week -1", 96.3, 48), ("Current", 96.8, 41)]
        .into_iter()
        .map(|(label, sla, backlog_minutes)| SlaTrendPoint {
            label: label.to_string(),
            sla,
            backlog_minutes,
        })
        .collect()
}

pub fn automation_programs() -> Vec<AutomationProgram> {
    [
        ("auto-01", "Billing whisper", 64, 70, "Nova Carter", "LLM guided refund trees"),
        ("auto-02", "Voice deflect", 42, 55, "Selene Ward", "Carrier-grade IVR intents"),
        ("auto-03", "Outage radar", 78, 80, "Theo Laurent", "Telemetry + proactive pages"),
    ]
    .into_iter()
    .map(|(id, name, coverage, target, owner, descriptor)| AutomationProgram {
        id: id.to_string(),
        name: name.to_string(),
        coverage,
        target,
        owner: owner.to_string(),
        descriptor: descriptor.to_string(),
    })
    .collect()
}
