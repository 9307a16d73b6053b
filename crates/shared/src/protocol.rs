use serde::{Deserialize, Serialize};

use crate::{
    domain::{Activity, DayPlan, Itinerary},
    error::PlanResponseError,
};

pub fn plan_route() -> &'static str {
    "/plan"
}

/// Body returned by the planning service.
///
/// Current planners answer `{"itinerary": {...}}`. Older planners answer
/// `{"success": true, "plan": [{"date": ..., "activities": [...]}]}` and
/// report failures as `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Itinerary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<LegacyDayEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyDayEntry {
    pub date: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl PlanResponse {
    pub fn into_itinerary(self) -> Result<Itinerary, PlanResponseError> {
        if self.success == Some(false) {
            return Err(PlanResponseError::Rejected(
                self.error
                    .unwrap_or_else(|| "no error detail provided".to_string()),
            ));
        }

        if let Some(itinerary) = self.itinerary {
            return Ok(itinerary);
        }

        match self.plan {
            Some(days) if !days.is_empty() => Ok(days
                .into_iter()
                .map(|entry| {
                    let plan = DayPlan {
                        title: entry.date.clone(),
                        activities: entry.activities,
                    };
                    (entry.date, plan)
                })
                .collect()),
            _ => Err(PlanResponseError::MissingItinerary),
        }
    }
}
