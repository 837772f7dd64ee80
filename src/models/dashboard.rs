use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use super::call::{Issue, Region};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Grouping tag used by the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KpiCategory {
    Stability,
    Efficiency,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Kpi {
    pub label: String,
    /// Raw numeric value, already rounded the way `display` shows it.
    pub value: f64,
    pub display: String,
    pub delta: f64,
    pub trend: Trend,
    pub descriptor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<KpiCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sparkline: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub voice: u32,
    pub chat: u32,
    pub email: u32,
    pub total: u32,
    pub forecast: u32,
}

impl VolumePoint {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            voice: 0,
            chat: 0,
            email: 0,
            total: 0,
            forecast: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IssueBreakdownEntry {
    pub issue: Issue,
    pub count: u32,
    pub percentage: f64,
    pub trend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionPerformanceEntry {
    pub region: Region,
    pub volume: u32,
    pub csat: f64,
    pub sla: f64,
    pub escalations: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightCard {
    pub title: String,
    pub detail: String,
    pub action: String,
    pub severity: Severity,
}
