use std::time::Duration;

use shared::domain::TripField;
use thiserror::Error;

pub const SUBMISSION_FAILED_TITLE: &str = "Error";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to generate trip plan. Please try again.";

/// Why a submission to the planning service failed.
///
/// The variants only matter for diagnostics. Users always see
/// [`SUBMISSION_FAILED_MESSAGE`].
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("invalid planner endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("planner endpoint '{url}' must use http or https")]
    UnsupportedScheme { url: String },
    #[error("planner request timed out after {0:?}")]
    TimedOut(Duration),
    #[error("planner unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("planner returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("planner reported failure: {0}")]
    Service(String),
    #[error("malformed planner response: {0}")]
    Malformed(String),
    #[error("planner unavailable: {0}")]
    Unavailable(String),
}

impl SubmissionError {
    pub fn user_message(&self) -> &'static str {
        SUBMISSION_FAILED_MESSAGE
    }
}

/// Why a submit never left the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("{} is required", .0.label())]
    MissingField(TripField),
    #[error("{} must be a whole number", .0.label())]
    NotANumber(TripField),
    #[error("{} must be at least {min}", .field.label())]
    BelowMinimum { field: TripField, min: i64 },
    #[error("a trip plan is already being generated")]
    InFlight,
    #[error("a trip plan has already been generated")]
    AlreadyPlanned,
}

impl SubmitRejected {
    /// The field the rejection points at, if any.
    pub fn field(&self) -> Option<TripField> {
        match self {
            Self::MissingField(field) | Self::NotANumber(field) => Some(*field),
            Self::BelowMinimum { field, .. } => Some(*field),
            Self::InFlight | Self::AlreadyPlanned => None,
        }
    }
}
