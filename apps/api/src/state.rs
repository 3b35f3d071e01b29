use std::sync::Arc;

use crate::planning::planner::RoadmapPlanner;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` until an OpenRouter key is configured; plan requests then fail
    /// with a configuration error instead of the server refusing to start.
    pub planner: Option<Arc<dyn RoadmapPlanner>>,
}
