use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trip field: {0}")]
pub struct UnknownTripField(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanResponseError {
    #[error("planner reported failure: {0}")]
    Rejected(String),
    #[error("response carried no itinerary")]
    MissingItinerary,
}
