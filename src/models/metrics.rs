use serde::{Deserialize, Serialize};

use super::call::Channel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelMetric {
    pub channel: Channel,
    pub share: f64,
    pub csat: f64,
    pub automation: f64,
    #[serde(rename = "avgHandleTime")]
    pub avg_handle_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlaTrendPoint {
    pub label: String,
    pub sla: f64,
    #[serde(rename = "backlogMinutes")]
    pub backlog_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutomationProgram {
    pub id: String,
    pub name: String,
    pub coverage: u32,
    pub target: u32,
    pub owner: String,
    pub descriptor: String,
}
