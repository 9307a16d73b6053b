//! Runtime bridge between the UI command queue and the planning service.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use planner_client::PlanningService;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the worker thread. It owns a tokio runtime and serves commands
/// until the UI drops its sender.
pub fn launch(
    planner: Arc<dyn PlanningService>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::WorkerStopped(format!(
                    "failed to build backend runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("planning worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let event = match cmd {
                    BackendCommand::GeneratePlan { request } => {
                        match planner.plan(&request).await {
                            Ok(itinerary) => UiEvent::PlanReady(itinerary),
                            Err(err) => UiEvent::PlanFailed(err),
                        }
                    }
                };
                // A lost outcome would leave the form spinning, so block rather than drop.
                if ui_tx.send(event).is_err() {
                    tracing::debug!("ui event receiver dropped; stopping planning worker");
                    break;
                }
            }
            tracing::info!("planning worker stopped");
        });
    })
}
