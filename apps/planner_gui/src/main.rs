mod backend_bridge;
mod controller;
mod ui;

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use planner_client::{load_settings, PlanningService};
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{PlannerApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Desktop trip planner")]
struct Args {
    /// Base URL of the planning service. Overrides planner.toml and env.
    #[arg(long)]
    planner_url: Option<String>,
    /// Hard timeout for one planning request, in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.planner_url {
        settings.planner_url = url;
    }
    if let Some(secs) = args.timeout_secs.filter(|secs| *secs > 0) {
        settings.request_timeout_secs = secs;
    }

    let planner = settings
        .planner()
        .with_context(|| format!("invalid planner url '{}'", settings.planner_url))?;
    tracing::info!(
        plan_url = %planner.plan_url(),
        timeout = ?planner.timeout(),
        "planner configured"
    );
    let planner: Arc<dyn PlanningService> = Arc::new(planner);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(planner, cmd_rx, ui_tx);

    let startup = StartupConfig {
        planner_url: settings.planner_url.clone(),
        toast_lifetime: settings.toast_lifetime().max(Duration::from_secs(1)),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Trip Planner")
            .with_inner_size([960.0, 820.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Trip Planner",
        options,
        Box::new(move |_cc| Ok(Box::new(PlannerApp::new(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run planner window: {err}"))
}
