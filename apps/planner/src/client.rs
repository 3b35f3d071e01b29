//! Transport for the single outbound call: `POST {base}/api/career-plan`.

use async_trait::async_trait;
use career_models::{CareerProfile, CareerRoadmap};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

pub const CAREER_PLAN_PATH: &str = "/api/career-plan";

pub const STATUS_FAILURE_MESSAGE: &str = "Failed to generate plan. Please try again.";
pub const FALLBACK_MESSAGE: &str = "Something went wrong";
pub const INVALID_ROADMAP_MESSAGE: &str =
    "Received an invalid plan from the server. Please try again.";

#[derive(Debug, Error)]
pub enum PlanError {
    /// The API answered with a non-2xx status. Body and status stay out of the UI.
    #[error("API returned status {0}")]
    Status(u16),

    /// The call itself failed: DNS, connection refused, malformed URL.
    #[error("{0}")]
    Transport(String),

    /// A 2xx response whose body is not a roadmap.
    #[error("invalid roadmap payload: {0}")]
    InvalidRoadmap(String),
}

impl PlanError {
    /// The text shown in the error area.
    pub fn user_message(&self) -> String {
        match self {
            PlanError::Status(_) => STATUS_FAILURE_MESSAGE.to_string(),
            PlanError::Transport(message) if message.trim().is_empty() => {
                FALLBACK_MESSAGE.to_string()
            }
            PlanError::Transport(message) => message.clone(),
            PlanError::InvalidRoadmap(_) => INVALID_ROADMAP_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for PlanError {
    fn from(e: reqwest::Error) -> Self {
        PlanError::Transport(e.to_string())
    }
}

/// Anything that can turn a profile into a roadmap.
///
/// The controller only talks to this trait, so tests swap in stubs.
#[async_trait]
pub trait PlanService: Send + Sync {
    async fn request_plan(&self, profile: &CareerProfile) -> Result<CareerRoadmap, PlanError>;
}

/// HTTP implementation against the roadmap API. No timeout and no retry.
#[derive(Clone)]
pub struct HttpPlanClient {
    client: Client,
    endpoint: String,
}

impl HttpPlanClient {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{api_base_url}{CAREER_PLAN_PATH}"),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PlanService for HttpPlanClient {
    async fn request_plan(&self, profile: &CareerProfile) -> Result<CareerRoadmap, PlanError> {
        debug!(endpoint = %self.endpoint, "Requesting career plan");

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(profile)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Career plan API returned {status}");
            return Err(PlanError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        CareerRoadmap::from_json(&body).map_err(|e| {
            warn!("Career plan API returned an unusable roadmap: {e}");
            PlanError::InvalidRoadmap(e.to_string())
        })
    }
}
