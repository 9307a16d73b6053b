//! Form controller: Idle -> Loading -> ResultReady, or back to Idle on failure.

use shared::domain::{InputKind, Itinerary, TripField, TripRequest};
use tracing::{debug, error, info, warn};

use crate::{
    error::{SubmissionError, SubmitRejected},
    notify::{Notification, Notifier},
    service::PlanningService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    ResultReady,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub request: TripRequest,
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub struct ResultState {
    pub itinerary: Itinerary,
    pub destination: String,
}

/// Which view is mounted. The result view is terminal.
#[derive(Debug, Clone)]
pub enum PlannerView {
    Form(FormState),
    Result(ResultState),
}

#[derive(Debug, Clone)]
pub struct FormController {
    view: PlannerView,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            view: PlannerView::Form(FormState::default()),
        }
    }

    pub fn view(&self) -> &PlannerView {
        &self.view
    }

    pub fn phase(&self) -> Phase {
        match &self.view {
            PlannerView::Form(form) if form.loading => Phase::Loading,
            PlannerView::Form(_) => Phase::Idle,
            PlannerView::Result(_) => Phase::ResultReady,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Loading
    }

    /// The request being edited. `None` once the result view is mounted.
    pub fn request(&self) -> Option<&TripRequest> {
        match &self.view {
            PlannerView::Form(form) => Some(&form.request),
            PlannerView::Result(_) => None,
        }
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        match &self.view {
            PlannerView::Form(_) => None,
            PlannerView::Result(result) => Some(&result.itinerary),
        }
    }

    /// Replaces one field. Edits stay allowed while a request is in flight,
    /// same as the inputs of the form itself.
    pub fn update_field(&mut self, field: TripField, value: impl Into<String>) {
        match &mut self.view {
            PlannerView::Form(form) => form.request.set(field, value),
            PlannerView::Result(_) => {
                debug!(%field, "ignoring field edit after the itinerary was rendered")
            }
        }
    }

    /// Moves Idle to Loading and hands out the request to send.
    pub fn begin_submit(&mut self) -> Result<TripRequest, SubmitRejected> {
        let form = match &mut self.view {
            PlannerView::Form(form) => form,
            PlannerView::Result(_) => return Err(SubmitRejected::AlreadyPlanned),
        };
        if form.loading {
            return Err(SubmitRejected::InFlight);
        }
        validate_request(&form.request)?;

        form.loading = true;
        info!(destination = %form.request.destination, "trip submission started");
        Ok(form.request.clone())
    }

    /// Applies the outcome of the request started by [`Self::begin_submit`].
    pub fn finish_submit<N: Notifier>(
        &mut self,
        outcome: Result<Itinerary, SubmissionError>,
        notifier: &mut N,
    ) -> Phase {
        let PlannerView::Form(form) = &mut self.view else {
            warn!("dropping submission outcome after the itinerary was rendered");
            return Phase::ResultReady;
        };
        if !form.loading {
            warn!("dropping submission outcome with no request in flight");
            return Phase::Idle;
        }

        match outcome {
            Ok(itinerary) => {
                info!(days = itinerary.len(), "trip plan ready");
                let destination = form.request.destination.clone();
                self.view = PlannerView::Result(ResultState {
                    itinerary,
                    destination,
                });
            }
            Err(err) => {
                error!(error = %err, "trip submission failed");
                form.loading = false;
                notifier.notify(Notification::submission_failed(&err));
            }
        }
        self.phase()
    }

    /// Runs a whole submission against `service`.
    pub async fn submit<S, N>(
        &mut self,
        service: &S,
        notifier: &mut N,
    ) -> Result<Phase, SubmitRejected>
    where
        S: PlanningService + ?Sized,
        N: Notifier,
    {
        let request = self.begin_submit()?;
        let outcome = service.plan(&request).await;
        Ok(self.finish_submit(outcome, notifier))
    }
}

/// Required and numeric constraints of the form widgets, first failure in form order.
pub fn validate_request(request: &TripRequest) -> Result<(), SubmitRejected> {
    for field in TripField::ALL {
        let value = request.get(field);
        if value.is_empty() {
            return Err(SubmitRejected::MissingField(field));
        }
        if let InputKind::Numeric { min } = field.input_kind() {
            let number = value
                .trim()
                .parse::<i64>()
                .map_err(|_| SubmitRejected::NotANumber(field))?;
            if let Some(min) = min {
                if number < min {
                    return Err(SubmitRejected::BelowMinimum { field, min });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
