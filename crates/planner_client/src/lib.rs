//! Trip planning client: the form controller, the HTTP planner it submits
//! through, and the itinerary renderer shared by the front ends.

pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod render;
pub mod service;

pub use config::{load_settings, Settings};
pub use controller::{validate_request, FormController, FormState, Phase, PlannerView, ResultState};
pub use error::{
    SubmissionError, SubmitRejected, SUBMISSION_FAILED_MESSAGE, SUBMISSION_FAILED_TITLE,
};
pub use notify::{Notification, Notifier, Severity, TracingNotifier};
pub use render::{render_itinerary, ActivityDetail, ActivityEntry, DaySection, ItineraryView};
pub use service::{HttpPlanner, PlanningService, DEFAULT_PLANNER_URL, DEFAULT_REQUEST_TIMEOUT};
