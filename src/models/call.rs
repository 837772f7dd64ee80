use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A single mock contact-center interaction.
///
/// Records are produced once by the record store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: String,
    #[serde(rename = "caseId")]
    pub case_id: String,
    pub agent: String,
    pub region: Region,
    pub channel: Channel,
    pub issue: Issue,
    pub priority: Priority,
    pub sentiment: Sentiment,
    pub status: CallStatus,
    #[serde(rename = "durationSeconds")]
    pub duration_seconds: u32,
    pub csat: u8,
    #[serde(rename = "npsDelta")]
    pub nps_delta: i32,
    #[serde(rename = "openedAt")]
    pub opened_at: DateTime<Utc>,
    #[serde(rename = "closedAt")]
    pub closed_at: DateTime<Utc>,
    #[serde(rename = "firstResponseMinutes")]
    pub first_response_minutes: u32,
    #[serde(rename = "firstContactResolution")]
    pub first_contact_resolution: bool,
}

impl CallRecord {
    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds as f64 / 60.0
    }

    pub fn is_resolved(&self) -> bool {
        self.status == CallStatus::Resolved
    }

    pub fn is_escalated(&self) -> bool {
        self.status == CallStatus::Escalated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Na,
    Emea,
    Apac,
    Latam,
    Anz,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::Na, Region::Emea, Region::Apac, Region::Latam, Region::Anz];

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Na => "NA",
            Region::Emea => "EMEA",
            Region::Apac => "APAC",
            Region::Latam => "LATAM",
            Region::Anz => "ANZ",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Voice,
    Chat,
    Email,
    Sms,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Voice, Channel::Chat, Channel::Email, Channel::Sms];

    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Voice => "voice",
            Channel::Chat => "chat",
            Channel::Email => "email",
            Channel::Sms => "sms",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Issue category, also used as the intent filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Issue {
    Billing,
    Outage,
    Refund,
    Upgrade,
    Security,
    Compliance,
    Integrations,
    #[serde(rename = "Voice Quality")]
    VoiceQuality,
}

impl Issue {
    pub const ALL: [Issue; 8] = [
        Issue::Billing,
        Issue::Outage,
        Issue::Refund,
        Issue::Upgrade,
        Issue::Security,
        Issue::Compliance,
        Issue::Integrations,
        Issue::VoiceQuality,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Issue::Billing => "Billing",
            Issue::Outage => "Outage",
            Issue::Refund => "Refund",
            Issue::Upgrade => "Upgrade",
            Issue::Security => "Security",
            Issue::Compliance => "Compliance",
            Issue::Integrations => "Integrations",
            Issue::VoiceQuality => "Voice Quality",
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Normal, Priority::High, Priority::Urgent];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Score used by the calls explorer average.
    pub fn score(&self) -> i32 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Neutral => 0,
            Sentiment::Negative => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Resolved,
    Pending,
    Escalated,
}

impl CallStatus {
    pub const ALL: [CallStatus; 3] = [CallStatus::Resolved, CallStatus::Pending, CallStatus::Escalated];
}
