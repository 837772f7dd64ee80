//! KPI cards for the dashboard and metrics views

use crate::models::{CallRecord, Kpi, KpiCategory, Trend};
use super::{effective_set, percent, round1};

const SPARKLINE_LENGTH: usize = 12;

/// Share of conversations that used the co-pilot. Not derived from records.
pub const AUTOMATION_ASSIST_RATE: f64 = 38.5;

/// Decorative trend line for a KPI card. Deterministic in `seed`.
pub fn build_sparkline(seed: f64, length: usize) -> Vec<f64> {
    (0..length)
        .map(|index| {
            let index = index as f64;
            let base = seed + index * 0.6;
            let wave = ((index + seed) / 2.5).sin() * 3.0;
            round1(base + wave)
        })
        .collect()
}

struct CardTemplate {
    label: &'static str,
    delta: f64,
    trend: Trend,
    descriptor: &'static str,
}

impl CardTemplate {
    fn card(&self, value: f64, display: String) -> Kpi {
        Kpi {
            label: self.label.to_string(),
            value,
            display,
            delta: self.delta,
            trend: self.trend,
            descriptor: self.descriptor.to_string(),
            category: None,
            sparkline: Vec::new(),
            goal: None,
        }
    }

    fn dashboard_card(
        &self,
        value: f64,
        display: String,
        category: KpiCategory,
        seed: f64,
        goal: &str,
    ) -> Kpi {
        Kpi {
            category: Some(category),
            sparkline: build_sparkline(seed, SPARKLINE_LENGTH),
            goal: Some(goal.to_string()),
            ..self.card(value, display)
        }
    }
}

/// Dashboard KPIs: volume, average handle time, resolution and escalation rates.
pub fn build_kpis(filtered: &[CallRecord], full: &[CallRecord]) -> Vec<Kpi> {
    let records = effective_set(filtered, full);
    let count = records.len();

    let total_duration: u64 = records.iter().map(|call| call.duration_seconds as u64).sum();
    let avg_handle_minutes = if count == 0 {
        0.0
    } else {
        (total_duration as f64 / count as f64 / 60.0).round()
    };
    let resolution_rate = round1(percent(records.iter().filter(|c| c.is_resolved()).count(), count));
    let escalation_rate = round1(percent(records.iter().filter(|c| c.is_escalated()).count(), count));

    vec![
        CardTemplate {
            label: "Total interactions",
            delta: 8.2,
            trend: Trend::Up,
            descriptor: "vs. previous 7 days",
        }
        .dashboard_card(count as f64, count.to_string(), KpiCategory::Stability, 68.0, "+5%"),
        CardTemplate {
            label: "Avg handle time",
            delta: -4.3,
            trend: Trend::Down,
            descriptor: "target 12m",
        }
        .dashboard_card(
            avg_handle_minutes,
            format!("{}m", avg_handle_minutes),
            KpiCategory::Efficiency,
            14.0,
            "\u{2264} 12m",
        ),
        CardTemplate {
            label: "Resolution rate",
            delta: 2.1,
            trend: Trend::Up,
            descriptor: "cases closed first touch",
        }
        .dashboard_card(
            resolution_rate,
            format!("{:.1}%", resolution_rate),
            KpiCategory::Stability,
            82.0,
            "\u{2265} 90%",
        ),
        CardTemplate {
            label: "Escalation",
            delta: 1.3,
            trend: Trend::Down,
            descriptor: "critical transfers",
        }
        .dashboard_card(
            escalation_rate,
            format!("{:.1}%", escalation_rate),
            KpiCategory::Efficiency,
            9.0,
            "< 8%",
        ),
    ]
}

/// Metrics-page KPIs: first response, FCR, automation assist and minutes saved.
pub fn build_metrics_kpis(filtered: &[CallRecord], full: &[CallRecord]) -> Vec<Kpi> {
    let records = effective_set(filtered, full);
    let count = records.len();

    let first_response_avg = if count == 0 {
        0.0
    } else {
        let total: u64 = records.iter().map(|c| c.first_response_minutes as u64).sum();
        round1(total as f64 / count as f64)
    };
    let fcr_rate = round1(percent(
        records.iter().filter(|c| c.first_contact_resolution).count(),
        count,
    ));
    let minutes_saved = (count as f64 * 0.18).round();

    vec![
        CardTemplate {
            label: "First response",
            delta: -1.1,
            trend: Trend::Down,
            descriptor: "Target under 9m",
        }
        .card(first_response_avg, format!("{:.1}m", first_response_avg)),
        CardTemplate {
            label: "FCR",
            delta: 2.8,
            trend: Trend::Up,
            descriptor: "First contact resolution",
        }
        .card(fcr_rate, format!("{:.1}%", fcr_rate)),
        CardTemplate {
            label: "Automation assist",
            delta: 4.2,
            trend: Trend::Up,
            descriptor: "Conversations using co-pilot",
        }
        .card(AUTOMATION_ASSIST_RATE, format!("{:.1}%", AUTOMATION_ASSIST_RATE)),
        CardTemplate {
            label: "Minutes saved",
            delta: 6.4,
            trend: Trend::Up,
            descriptor: "Deflected via proactive alerts",
        }
        .card(minutes_saved, format!("{}m", minutes_saved)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::calls_dataset;

    #[test]
    fn test_dashboard_kpis_over_default_dataset() {
        let dataset = calls_dataset();
        let kpis = build_kpis(dataset, dataset);

        assert_eq!(kpis.len(), 4);
        assert_eq!(kpis[0].display, "180");
        assert_eq!(kpis[1].display, "11m");
        assert_eq!(kpis[2].display, "33.3%");
        assert_eq!(kpis[3].display, "33.3%");
        assert_eq!(kpis[2].value, 33.3);

        assert_eq!(kpis[0].category, Some(KpiCategory::Stability));
        assert_eq!(kpis[1].category, Some(KpiCategory::Efficiency));
        assert!(kpis.iter().all(|k| k.sparkline.len() == 12));
    }

    #[test]
    fn test_metrics_kpis_over_default_dataset() {
        let dataset = calls_dataset();
        let kpis = build_metrics_kpis(dataset, dataset);

        let displays: Vec<&str> = kpis.iter().map(|k| k.display.as_str()).collect();
        assert_eq!(displays, vec!["16.5m", "11.1%", "38.5%", "32m"]);
        assert!(kpis.iter().all(|k| k.category.is_none() && k.sparkline.is_empty()));
    }

    #[test]
    fn test_kpis_on_empty_population_are_zero() {
        let kpis = build_kpis(&[], &[]);
        assert_eq!(kpis[0].value, 0.0);
        assert_eq!(kpis[1].display, "0m");
        assert_eq!(kpis[2].display, "0.0%");

        let metrics = build_metrics_kpis(&[], &[]);
        assert_eq!(metrics[0].display, "0.0m");
        assert_eq!(metrics[3].display, "0m");
    }

    #[test]
    fn test_sparkline_values() {
        assert_eq!(build_sparkline(68.0, 12)[..3], [70.6, 70.5, 70.0]);
        assert_eq!(build_sparkline(9.0, 12)[..3], [7.7, 7.3, 7.3]);
        assert_eq!(build_sparkline(9.0, 12), build_sparkline(9.0, 12));
    }
}
