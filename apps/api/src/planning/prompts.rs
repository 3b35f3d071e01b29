// All LLM prompt constants for roadmap generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use career_models::CareerProfile;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Persona and planning rules for the career counselor.
pub const PLANNER_SYSTEM: &str = "You are an expert tech career counselor. \
    Create a detailed, actionable 4-week study plan based on the user's profile. \
    Be realistic about what can be achieved with the given daily hours. \
    Focus on free, high-quality resources.";

/// Output schema the roadmap must follow. Appended to every generation prompt.
pub const ROADMAP_SCHEMA_INSTRUCTIONS: &str = r#"Return a JSON object with this EXACT schema (no extra fields):
{
  "summary": "A brief encouraging summary of the plan",
  "skill_gaps": ["Skills needed for the target role that are missing"],
  "study_plan": [
    {
      "week_number": 1,
      "focus_area": "Main theme of the week",
      "tasks": ["Concrete task sized to the daily hours"]
    }
  ],
  "learning_resources": ["Curated list of 3-5 high quality, free learning resources"],
  "next_steps": ["Immediate next 3 actions to take"]
}

Rules:
- study_plan has exactly 4 entries, week_number 1 through 4 in order.
- learning_resources has 3 to 5 entries.
- next_steps has exactly 3 entries."#;

/// Full system prompt sent with every roadmap request.
pub fn system_prompt() -> String {
    format!("{PLANNER_SYSTEM} {JSON_ONLY_SYSTEM}")
}

/// Renders the user turn for a profile.
pub fn profile_prompt(profile: &CareerProfile) -> String {
    format!(
        "User Profile:\n\
         Degree: {}\n\
         Skills: {}\n\
         Target Role: {}\n\
         Daily Hours: {}\n\n\
         Generate a career roadmap.\n\n\
         {ROADMAP_SCHEMA_INSTRUCTIONS}",
        profile.degree,
        profile.skills.join(", "),
        profile.target_role,
        profile.daily_hours,
    )
}

/// Follow-up prompt after the model returned something that is not a roadmap.
pub fn correction_prompt(original: &str, problem: &str) -> String {
    format!(
        "{original}\n\n\
         Your previous reply could not be used: {problem}\n\
         Reply again with JSON that matches the schema exactly."
    )
}
