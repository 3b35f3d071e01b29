//! Roadmap planner — pluggable, trait-based generator behind `POST /api/career-plan`.
//!
//! Default: `LlmRoadmapPlanner`, which asks the model for JSON and validates
//! it against `CareerRoadmap`, re-asking when the shape is wrong.
//!
//! `AppState` holds an `Arc<dyn RoadmapPlanner>`, so handler tests can use stubs.

use async_trait::async_trait;
use career_models::{CareerProfile, CareerRoadmap};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::planning::prompts::{correction_prompt, profile_prompt, system_prompt};

/// Extra attempts after model output fails roadmap validation.
pub const OUTPUT_RETRIES: u32 = 2;

#[async_trait]
pub trait RoadmapPlanner: Send + Sync {
    async fn plan(&self, profile: &CareerProfile) -> Result<CareerRoadmap, AppError>;
}

/// Something that answers a prompt with text. `LlmClient` in production.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, AppError>;
}

#[async_trait]
impl TextModel for LlmClient {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, AppError> {
        self.call_text(prompt, system)
            .await
            .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))
    }
}

pub struct LlmRoadmapPlanner<M = LlmClient> {
    model: M,
}

impl<M: TextModel> LlmRoadmapPlanner<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

#[async_trait]
impl<M: TextModel> RoadmapPlanner for LlmRoadmapPlanner<M> {
    async fn plan(&self, profile: &CareerProfile) -> Result<CareerRoadmap, AppError> {
        let system = system_prompt();
        let base_prompt = profile_prompt(profile);
        let mut prompt = base_prompt.clone();
        let mut last_problem = String::new();

        for attempt in 0..=OUTPUT_RETRIES {
            let text = self.model.complete(&prompt, &system).await?;
            match CareerRoadmap::from_llm_text(&text) {
                Ok(roadmap) => return Ok(roadmap),
                Err(e) => {
                    warn!(attempt, "Model output is not a valid roadmap: {e}");
                    last_problem = e.to_string();
                    prompt = correction_prompt(&base_prompt, &last_problem);
                }
            }
        }

        Err(AppError::Llm(format!(
            "No valid roadmap after {} attempts: {last_problem}",
            OUTPUT_RETRIES + 1
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    const VALID: &str = r#"{
        "summary": "You are closer than you think.",
        "skill_gaps": ["PyTorch"],
        "study_plan": [
            {"week_number": 1, "focus_area": "Math", "tasks": ["Linear algebra"]},
            {"week_number": 2, "focus_area": "PyTorch", "tasks": ["Tensors"]},
            {"week_number": 3, "focus_area": "Models", "tasks": ["Train a CNN"]},
            {"week_number": 4, "focus_area": "Deploy", "tasks": ["Serve a model"]}
        ],
        "learning_resources": ["fast.ai", "d2l.ai", "CS231n"],
        "next_steps": ["Install PyTorch", "Pick a dataset", "Block study time"]
    }"#;

    /// Replays canned replies and records every prompt it receives.
    struct ScriptedModel {
        replies: Mutex<Vec<Result<String, String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn new(replies: Vec<Result<&str, &str>>) -> Self {
            let mut replies: Vec<Result<String, String>> = replies
                .into_iter()
                .map(|r| r.map(str::to_string).map_err(str::to_string))
                .collect();
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextModel for ScriptedModel {
        async fn complete(&self, prompt: &str, _system: &str) -> Result<String, AppError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop()
                .expect("no scripted reply left")
                .map_err(AppError::Llm)
        }
    }

    fn profile() -> CareerProfile {
        CareerProfile {
            degree: "BSc CS".to_string(),
            skills: vec!["Python".to_string()],
            target_role: "AI Engineer".to_string(),
            daily_hours: 2,
        }
    }

    #[tokio::test]
    async fn test_valid_reply_is_returned() {
        let planner = LlmRoadmapPlanner::new(ScriptedModel::new(vec![Ok(VALID)]));
        let roadmap = planner.plan(&profile()).await.unwrap();
        assert_eq!(roadmap.study_plan.len(), 4);
        assert_eq!(roadmap.next_steps.len(), 3);
    }

    #[tokio::test]
    async fn test_fenced_reply_is_accepted() {
        let fenced = format!("```json\n{VALID}\n```");
        let planner = LlmRoadmapPlanner::new(ScriptedModel::new(vec![Ok(fenced.as_str())]));
        assert!(planner.plan(&profile()).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_reply_is_retried_with_correction() {
        let model = ScriptedModel::new(vec![Ok(r#"{"summary": "only"}"#), Ok(VALID)]);
        let planner = LlmRoadmapPlanner::new(model);
        assert!(planner.plan(&profile()).await.is_ok());

        let prompts = planner.model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert!(!prompts[0].contains("could not be used"));
        assert!(prompts[1].contains("could not be used"));
        assert!(prompts[1].contains("skill_gaps"));
    }

    #[tokio::test]
    async fn test_gives_up_after_output_retries() {
        let model = ScriptedModel::new(vec![Ok("nope"), Ok("still no"), Ok("[]")]);
        let planner = LlmRoadmapPlanner::new(model);
        let err = planner.plan(&profile()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(planner.model.prompts.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_model_failure_is_not_retried_here() {
        let model = ScriptedModel::new(vec![Err("upstream down")]);
        let planner = LlmRoadmapPlanner::new(model);
        let err = planner.plan(&profile()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(msg) if msg == "upstream down"));
        assert_eq!(planner.model.prompts.lock().unwrap().len(), 1);
    }
}
