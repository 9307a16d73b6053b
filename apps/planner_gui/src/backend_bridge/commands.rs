use shared::domain::TripRequest;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    GeneratePlan { request: TripRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GeneratePlan { .. } => "generate_plan",
        }
    }
}
