//! Dashboard context
//!
//! Binds the record store to a filter store and recomputes every view model
//! on demand. Nothing is cached: each snapshot reflects the selection at the
//! moment it was taken.

use serde::Serialize;

use crate::analytics::{
    build_channel_metrics, build_issue_breakdown, build_kpis, build_metrics_kpis,
    build_region_performance, build_volume_series, filter_calls, filter_summary, CallsExplorer,
};
use crate::config::AnalyticsConfig;
use crate::data::{self, catalog};
use crate::error::AnalyticsResult;
use crate::models::*;
use crate::state::FilterStore;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub summary: String,
    pub kpis: Vec<Kpi>,
    #[serde(rename = "volumeSeries")]
    pub volume_series: Vec<VolumePoint>,
    #[serde(rename = "issueBreakdown")]
    pub issue_breakdown: Vec<IssueBreakdownEntry>,
    #[serde(rename = "regionPerformance")]
    pub region_performance: Vec<RegionPerformanceEntry>,
    pub insights: Vec<InsightCard>,
    #[serde(rename = "recentCalls")]
    pub recent_calls: Vec<CallRecord>,
    #[serde(rename = "longRunningCalls")]
    pub long_running_calls: Vec<CallRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsView {
    pub selection: FilterSelection,
    pub kpis: Vec<Kpi>,
    #[serde(rename = "channelMetrics")]
    pub channel_metrics: Vec<ChannelMetric>,
    #[serde(rename = "slaTrend")]
    pub sla_trend: Vec<SlaTrendPoint>,
    #[serde(rename = "automationPrograms")]
    pub automation_programs: Vec<AutomationProgram>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallsView {
    pub selection: FilterSelection,
    pub summary: String,
    #[serde(flatten)]
    pub explorer: CallsExplorer,
    #[serde(rename = "longestRunningLabels")]
    pub longest_running_labels: Vec<String>,
    #[serde(rename = "escalationLabels")]
    pub escalation_labels: Vec<String>,
}

pub struct Dashboard {
    records: Vec<CallRecord>,
    agents: Vec<AgentPerformance>,
    filters: FilterStore,
}

impl Dashboard {
    pub fn new(records: Vec<CallRecord>, filters: FilterStore) -> Self {
        Self {
            records,
            agents: data::generate_agents(),
            filters,
        }
    }

    pub fn from_config(config: &AnalyticsConfig) -> AnalyticsResult<Self> {
        config.validate()?;
        let records = data::generate_records(&config.generation_params());
        tracing::info!(
            "Dashboard ready with {} records, selection [{}]",
            records.len(),
            config.default_selection.summary()
        );
        Ok(Self::new(records, FilterStore::new(config.default_selection)))
    }

    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }

    pub fn agents(&self) -> &[AgentPerformance] {
        &self.agents
    }

    pub fn filters(&self) -> &FilterStore {
        &self.filters
    }

    pub fn dashboard(&self) -> DashboardView {
        let selection = self.filters.selection();
        let filtered = filter_calls(&self.records, &selection);

        DashboardView {
            selection,
            summary: filter_summary(&selection),
            kpis: build_kpis(&filtered, &self.records),
            volume_series: build_volume_series(&filtered, &self.records),
            issue_breakdown: build_issue_breakdown(&filtered, &self.records),
            region_performance: build_region_performance(&filtered, &self.records),
            insights: catalog::proactive_insights(),
            recent_calls: data::recent_calls(&self.records).to_vec(),
            long_running_calls: data::long_running_calls(&self.records),
        }
    }

    pub fn metrics(&self) -> MetricsView {
        let selection = self.filters.selection();
        let filtered = filter_calls(&self.records, &selection);

        MetricsView {
            selection,
            kpis: build_metrics_kpis(&filtered, &self.records),
            channel_metrics: build_channel_metrics(&filtered, &self.records),
            sla_trend: catalog::sla_trend(),
            automation_programs: catalog::automation_programs(),
        }
    }

    pub fn calls(&self) -> CallsView {
        let selection = self.filters.selection();
        let explorer = CallsExplorer::build(&filter_calls(&self.records, &selection));
        CallsView {
            selection,
            summary: filter_summary(&selection),
            longest_running_labels: explorer.longest_running_labels(),
            escalation_labels: explorer.escalation_labels(),
            explorer,
        }
    }

    pub fn call(&self, id: &str) -> AnalyticsResult<&CallRecord> {
        data::find_call(&self.records, id)
    }

    pub fn top_agents(&self) -> &[AgentPerformance] {
        data::top_agents(&self.agents)
    }
}
