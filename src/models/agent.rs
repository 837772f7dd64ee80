use serde::{Deserialize, Serialize};

use super::call::Region;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentPerformance {
    pub id: String,
    pub name: String,
    pub region: Region,
    pub role: AgentRole,
    #[serde(rename = "callsHandled")]
    pub calls_handled: u32,
    #[serde(rename = "avgHandleTime")]
    pub avg_handle_time: u32,
    pub csat: f64,
    pub sla: u32,
    #[serde(rename = "scheduleAdherence")]
    pub schedule_adherence: u32,
    #[serde(rename = "sentimentLift")]
    pub sentiment_lift: f64,
    #[serde(rename = "focusAreas")]
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgentRole {
    Escalations,
    Enterprise,
    Core,
}

