use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One week of the study plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week_number: u32,
    pub focus_area: String,
    pub tasks: Vec<String>,
}

/// The generated career roadmap. Every field is required on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRoadmap {
    pub summary: String,
    pub skill_gaps: Vec<String>,
    pub study_plan: Vec<WeeklyPlan>,
    pub learning_resources: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("roadmap payload does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("roadmap payload is empty")]
    Empty,
}

impl CareerRoadmap {
    /// Parses and shape-checks an untrusted roadmap payload.
    pub fn from_json(bytes: &[u8]) -> Result<Self, RoadmapError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(RoadmapError::Empty);
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Like [`CareerRoadmap::from_json`], but tolerates Markdown code fences
    /// around the JSON, which models tend to add.
    pub fn from_llm_text(text: &str) -> Result<Self, RoadmapError> {
        Self::from_json(strip_json_fences(text).as_bytes())
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}
