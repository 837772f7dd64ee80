//! Support Analytics - command line front end
//!
//! Prints dashboard view models as JSON for a given filter selection.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use support_analytics::data::catalog;
use support_analytics::models::{
    IntentFilter, RefreshEvent, RegionFilter, SettingsDiagnostic, TimeWindow,
};
use support_analytics::state::RefreshLog;
use support_analytics::{AnalyticsConfig, Dashboard};

#[derive(Parser)]
#[command(name = "support-analytics")]
#[command(about = "Contact-center analytics over a seeded call dataset", long_about = None)]
#[command(version)]
struct Cli {
    /// Time window: 24h, 3d, 7d, 30d or 90d
    #[arg(long, global = true)]
    window: Option<TimeWindow>,

    /// Region: Global, NA, EMEA, APAC, LATAM or ANZ
    #[arg(long, global = true)]
    region: Option<RegionFilter>,

    /// Intent: "All intents" or an issue category such as Billing
    #[arg(long, global = true)]
    intent: Option<IntentFilter>,

    /// Number of generated call records
    #[arg(long, global = true)]
    records: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// KPI cards, volume series, issue breakdown and region performance
    Dashboard,

    /// Calls explorer for the current selection
    Calls,

    /// Show a single call record
    Call {
        /// Call id, e.g. call_0042
        id: String,
    },

    /// Metrics KPIs, channel metrics, SLA trend and automation programs
    Metrics,

    /// Agent leaderboard
    Agents {
        /// Show the full roster instead of the top six
        #[arg(long)]
        all: bool,
    },

    /// Data plane diagnostics and refresh history
    Settings {
        /// Trigger a (simulated) refresh first
        #[arg(long)]
        refresh: bool,
    },
}

#[derive(Serialize)]
struct SettingsView<'a> {
    diagnostics: Vec<SettingsDiagnostic>,
    #[serde(rename = "lastRefreshed")]
    last_refreshed: Option<DateTime<Utc>>,
    history: &'a [RefreshEvent],
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("support_analytics=info")))
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AnalyticsConfig::from_env().context("Invalid configuration")?;
    if let Some(records) = cli.records {
        config.record_count = records;
    }

    let dashboard = Dashboard::from_config(&config).context("Failed to build dashboard")?;
    let filters = dashboard.filters();
    if let Some(window) = cli.window {
        filters.set_window(window);
    }
    if let Some(region) = cli.region {
        filters.set_region(region);
    }
    if let Some(intent) = cli.intent {
        filters.set_intent(intent);
    }

    match cli.command {
        Commands::Dashboard => print_json(&dashboard.dashboard()),
        Commands::Calls => print_json(&dashboard.calls()),
        Commands::Call { id } => print_json(dashboard.call(&id)?),
        Commands::Metrics => print_json(&dashboard.metrics()),
        Commands::Agents { all } => {
            if all {
                print_json(&dashboard.agents())
            } else {
                print_json(&dashboard.top_agents())
            }
        }
        Commands::Settings { refresh } => {
            let mut log = RefreshLog::default();
            if refresh {
                log.simulate(config.refresh_latency).await;
            }
            print_json(&SettingsView {
                diagnostics: catalog::diagnostics(),
                last_refreshed: log.last_refreshed(),
                history: log.history(),
            })
        }
    }
}
