use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Itinerary, TripRequest},
    error::PlanResponseError,
    protocol::{plan_route, PlanResponse},
};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::SubmissionError;

pub const DEFAULT_PLANNER_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(180);
const MAX_ERROR_DETAIL_CHARS: usize = 512;

/// Anything that can turn a trip request into an itinerary.
#[async_trait]
pub trait PlanningService: Send + Sync {
    async fn plan(&self, request: &TripRequest) -> Result<Itinerary, SubmissionError>;
}

/// Planning service reached over HTTP: `POST {base_url}/plan`.
#[derive(Debug, Clone)]
pub struct HttpPlanner {
    http: Client,
    plan_url: Url,
    timeout: Duration,
}

impl HttpPlanner {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SubmissionError> {
        Ok(Self {
            http: Client::new(),
            plan_url: plan_url_for(base_url)?,
            timeout,
        })
    }

    pub fn plan_url(&self) -> &Url {
        &self.plan_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify_transport(&self, err: reqwest::Error) -> SubmissionError {
        if err.is_timeout() {
            SubmissionError::TimedOut(self.timeout)
        } else {
            SubmissionError::Transport(err)
        }
    }
}

#[async_trait]
impl PlanningService for HttpPlanner {
    async fn plan(&self, request: &TripRequest) -> Result<Itinerary, SubmissionError> {
        debug!(url = %self.plan_url, destination = %request.destination, "submitting trip request");
        let response = self
            .http
            .post(self.plan_url.clone())
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|err| self.classify_transport(err))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "planner returned an error status");
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                detail: truncate_detail(&detail),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.classify_transport(err))?;
        let envelope: PlanResponse = serde_json::from_slice(&body)
            .map_err(|err| SubmissionError::Malformed(err.to_string()))?;
        let itinerary = envelope.into_itinerary().map_err(|err| match err {
            PlanResponseError::Rejected(detail) => SubmissionError::Service(detail),
            PlanResponseError::MissingItinerary => SubmissionError::Malformed(err.to_string()),
        })?;

        info!(
            days = itinerary.len(),
            activities = itinerary.activity_count(),
            "received itinerary"
        );
        Ok(itinerary)
    }
}

fn plan_url_for(base_url: &str) -> Result<Url, SubmissionError> {
    let base = base_url.trim().trim_end_matches('/');
    let raw = format!("{base}{}", plan_route());
    let url = Url::parse(&raw).map_err(|source| SubmissionError::InvalidEndpoint {
        url: base_url.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SubmissionError::UnsupportedScheme {
            url: base_url.to_string(),
        });
    }
    Ok(url)
}

fn truncate_detail(detail: &str) -> String {
    let detail = detail.trim();
    match detail.char_indices().nth(MAX_ERROR_DETAIL_CHARS) {
        Some((cut, _)) => format!("{}...", &detail[..cut]),
        None => detail.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
