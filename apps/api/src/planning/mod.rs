// Roadmap generation: profile → prompt → model → validated roadmap.
// All model calls go through llm_client.

pub mod handlers;
pub mod planner;
pub mod prompts;
