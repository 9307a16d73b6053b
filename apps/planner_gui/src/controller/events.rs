//! Events the planning worker posts back to the UI thread.

use planner_client::SubmissionError;
use shared::domain::Itinerary;

#[derive(Debug)]
pub enum UiEvent {
    PlanReady(Itinerary),
    PlanFailed(SubmissionError),
    WorkerStopped(String),
}
