//! Filter selection types
//!
//! Every filter axis is a closed set. String input is only accepted through
//! `FromStr`, which rejects anything outside the set.

use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AnalyticsError;
use super::call::{Issue, Region};

/// Rolling time span, measured back from the dataset's latest `opened_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    Last24Hours,
    Last3Days,
    #[default]
    Last7Days,
    Last30Days,
    Last90Days,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Last24Hours,
        TimeWindow::Last3Days,
        TimeWindow::Last7Days,
        TimeWindow::Last30Days,
        TimeWindow::Last90Days,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Last24Hours => "24h",
            TimeWindow::Last3Days => "3d",
            TimeWindow::Last7Days => "7d",
            TimeWindow::Last30Days => "30d",
            TimeWindow::Last90Days => "90d",
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            TimeWindow::Last24Hours => Duration::hours(24),
            TimeWindow::Last3Days => Duration::days(3),
            TimeWindow::Last7Days => Duration::days(7),
            TimeWindow::Last30Days => Duration::days(30),
            TimeWindow::Last90Days => Duration::days(90),
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeWindow {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeWindow::ALL
            .into_iter()
            .find(|w| w.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalyticsError::InvalidWindow(s.to_string()))
    }
}

/// Region axis: `Global` or one concrete region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegionFilter {
    #[default]
    Global,
    Only(Region),
}

impl RegionFilter {
    pub fn matches(&self, region: Region) -> bool {
        match self {
            RegionFilter::Global => true,
            RegionFilter::Only(selected) => *selected == region,
        }
    }

    pub fn options() -> Vec<RegionFilter> {
        std::iter::once(RegionFilter::Global)
            .chain(Region::ALL.into_iter().map(RegionFilter::Only))
            .collect()
    }
}

impl std::fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionFilter::Global => f.write_str("Global"),
            RegionFilter::Only(region) => write!(f, "{}", region),
        }
    }
}

impl FromStr for RegionFilter {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("Global") {
            return Ok(RegionFilter::Global);
        }
        Region::ALL
            .into_iter()
            .find(|r| r.display_name().eq_ignore_ascii_case(value))
            .map(RegionFilter::Only)
            .ok_or_else(|| AnalyticsError::InvalidRegion(s.to_string()))
    }
}

/// Intent axis: every issue category, or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntentFilter {
    #[default]
    AllIntents,
    Only(Issue),
}

impl IntentFilter {
    pub fn matches(&self, issue: Issue) -> bool {
        match self {
            IntentFilter::AllIntents => true,
            IntentFilter::Only(selected) => *selected == issue,
        }
    }

    pub fn options() -> Vec<IntentFilter> {
        std::iter::once(IntentFilter::AllIntents)
            .chain(Issue::ALL.into_iter().map(IntentFilter::Only))
            .collect()
    }
}

impl std::fmt::Display for IntentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntentFilter::AllIntents => f.write_str("All intents"),
            IntentFilter::Only(issue) => write!(f, "{}", issue),
        }
    }
}

impl FromStr for IntentFilter {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("All intents") || value.eq_ignore_ascii_case("all") {
            return Ok(IntentFilter::AllIntents);
        }
        Issue::ALL
            .into_iter()
            .find(|i| i.display_name().eq_ignore_ascii_case(value))
            .map(IntentFilter::Only)
            .ok_or_else(|| AnalyticsError::InvalidIntent(s.to_string()))
    }
}

// The filter axes travel as their display labels ("7d", "Global", "All intents").
macro_rules! label_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

label_serde!(TimeWindow);
label_serde!(RegionFilter);
label_serde!(IntentFilter);

/// The user's current filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub window: TimeWindow,
    pub region: RegionFilter,
    pub intent: IntentFilter,
}

impl FilterSelection {
    pub fn new(window: TimeWindow, region: RegionFilter, intent: IntentFilter) -> Self {
        Self { window, region, intent }
    }

    /// One-line description, e.g. `7d • Global • All intents`.
    pub fn summary(&self) -> String {
        format!("{} \u{2022} {} \u{2022} {}", self.window, self.region, self.intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = FilterSelection::default();
        assert_eq!(selection.window, TimeWindow::Last7Days);
        assert_eq!(selection.region, RegionFilter::Global);
        assert_eq!(selection.intent, IntentFilter::AllIntents);
        assert_eq!(selection.summary(), "7d \u{2022} Global \u{2022} All intents");
    }

    #[test]
    fn test_window_durations() {
        assert_eq!(TimeWindow::Last24Hours.duration().num_milliseconds(), 86_400_000);
        assert_eq!(TimeWindow::Last7Days.duration().num_milliseconds(), 604_800_000);
        assert_eq!(TimeWindow::Last90Days.duration().num_milliseconds(), 7_776_000_000);
    }

    #[test]
    fn test_parse_rejects_values_outside_the_set() {
        assert!(matches!("14d".parse::<TimeWindow>(), Err(AnalyticsError::InvalidWindow(_))));
        assert!(matches!("EU".parse::<RegionFilter>(), Err(AnalyticsError::InvalidRegion(_))));
        assert!(matches!("Returns".parse::<IntentFilter>(), Err(AnalyticsError::InvalidIntent(_))));
    }

    #[test]
    fn test_parse_accepts_labels() {
        assert_eq!("30d".parse::<TimeWindow>().unwrap(), TimeWindow::Last30Days);
        assert_eq!("emea".parse::<RegionFilter>().unwrap(), RegionFilter::Only(Region::Emea));
        assert_eq!("global".parse::<RegionFilter>().unwrap(), RegionFilter::Global);
        assert_eq!(
            "Voice Quality".parse::<IntentFilter>().unwrap(),
            IntentFilter::Only(Issue::VoiceQuality)
        );
        assert_eq!("All intents".parse::<IntentFilter>().unwrap(), IntentFilter::AllIntents);
    }

    #[test]
    fn test_selection_serializes_as_labels() {
        let selection = FilterSelection::new(
            TimeWindow::Last24Hours,
            RegionFilter::Only(Region::Anz),
            IntentFilter::Only(Issue::Refund),
        );
        let json = serde_json::to_value(selection).unwrap();
        assert_eq!(json["window"], "24h");
        assert_eq!(json["region"], "ANZ");
        assert_eq!(json["intent"], "Refund");

        let back: FilterSelection = serde_json::from_value(json).unwrap();
        assert_eq!(back, selection);
    }

    #[test]
    fn test_option_lists() {
        assert_eq!(RegionFilter::options().len(), 6);
        assert_eq!(IntentFilter::options().len(), 9);
        assert_eq!(RegionFilter::options()[0], RegionFilter::Global);
    }
}
