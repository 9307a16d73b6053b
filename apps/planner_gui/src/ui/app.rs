//! App shell: owns the form controller and routes worker events into it.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use planner_client::{
    render_itinerary, FormController, ItineraryView, PlannerView, SubmissionError, SubmitRejected,
};
use shared::domain::TripField;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{
    form::{self, FormProps},
    result, theme,
    toast::ToastQueue,
};

const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub planner_url: String,
    pub toast_lifetime: Duration,
}

pub struct PlannerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: FormController,
    toasts: ToastQueue,
    rejection: Option<SubmitRejected>,
    focus_pending: bool,
    result_view: Option<ItineraryView>,
    status: String,
    theme_applied: bool,
}

impl PlannerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        tracing::info!(planner_url = %startup.planner_url, "planner window starting");
        Self {
            cmd_tx,
            ui_rx,
            controller: FormController::new(),
            toasts: ToastQueue::new(startup.toast_lifetime),
            rejection: None,
            focus_pending: false,
            result_view: None,
            status: String::new(),
            theme_applied: false,
        }
    }

    pub(crate) fn update_field(&mut self, field: TripField, value: String) {
        self.controller.update_field(field, value);
        if self.rejection.and_then(|r| r.field()) == Some(field) {
            self.rejection = None;
        }
    }

    pub(crate) fn submit(&mut self) {
        match self.controller.begin_submit() {
            Ok(request) => {
                self.rejection = None;
                self.status.clear();
                let cmd = BackendCommand::GeneratePlan { request };
                if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
                    self.controller.finish_submit(Err(err), &mut self.toasts);
                }
            }
            Err(reason @ (SubmitRejected::InFlight | SubmitRejected::AlreadyPlanned)) => {
                tracing::debug!(%reason, "ignoring submit");
            }
            Err(reason) => {
                tracing::debug!(%reason, "submit blocked by form validation");
                self.rejection = Some(reason);
                self.focus_pending = true;
            }
        }
    }

    /// Drains worker events. Kept free of egui so it can run headless.
    pub(crate) fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::PlanReady(itinerary) => {
                    self.controller.finish_submit(Ok(itinerary), &mut self.toasts);
                }
                UiEvent::PlanFailed(err) => {
                    self.controller.finish_submit(Err(err), &mut self.toasts);
                }
                UiEvent::WorkerStopped(reason) => {
                    self.status = format!("Planning worker stopped: {reason}");
                    if self.controller.is_loading() {
                        self.controller
                            .finish_submit(Err(SubmissionError::Unavailable(reason)), &mut self.toasts);
                    }
                }
            }
        }

        if self.result_view.is_none() {
            if let PlannerView::Result(result) = self.controller.view() {
                self.result_view = Some(render_itinerary(&result.itinerary, &result.destination));
            }
        }
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        let PlannerView::Form(state) = self.controller.view() else {
            return;
        };
        let focus = self
            .focus_pending
            .then(|| self.rejection.and_then(|r| r.field()))
            .flatten();
        let output = form::show_form_view(
            ctx,
            FormProps {
                request: &state.request,
                loading: state.loading,
                rejection: self.rejection,
                focus,
                status: &self.status,
            },
        );
        self.focus_pending = false;

        for (field, value) in output.edits {
            self.update_field(field, value);
        }
        if output.submit {
            self.submit();
        }
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        self.process_ui_events();
        self.toasts.expire(Instant::now());

        if let Some(view) = &self.result_view {
            result::show_result_view(ctx, view);
        } else {
            self.show_form(ctx);
        }
        self.toasts.show(ctx);

        // Worker events arrive without input, so keep polling while one is due.
        if self.controller.is_loading() || !self.toasts.is_empty() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }
    }
}
