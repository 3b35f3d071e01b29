//! Request lifecycle as an explicit state machine.
//!
//! `reduce` is pure: it never performs I/O and returns `None` when an event has
//! no effect in the current state.

use career_models::CareerRoadmap;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PlanState {
    #[default]
    Idle,
    Loading,
    Success(CareerRoadmap),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanEvent {
    Submitted,
    Succeeded(CareerRoadmap),
    Failed(String),
    Reset,
}

impl PlanState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PlanState::Loading)
    }

    pub fn roadmap(&self) -> Option<&CareerRoadmap> {
        match self {
            PlanState::Success(roadmap) => Some(roadmap),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PlanState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The form stays on screen until a roadmap replaces it.
    pub fn shows_form(&self) -> bool {
        self.roadmap().is_none()
    }
}

pub fn reduce(state: &PlanState, event: PlanEvent) -> Option<PlanState> {
    match (state, event) {
        // A request in flight is never joined by a second one.
        (PlanState::Loading, PlanEvent::Submitted) => None,
        (_, PlanEvent::Submitted) => Some(PlanState::Loading),

        (PlanState::Loading, PlanEvent::Succeeded(roadmap)) => Some(PlanState::Success(roadmap)),
        (PlanState::Loading, PlanEvent::Failed(message)) => Some(PlanState::Failed(message)),
        (_, PlanEvent::Succeeded(_) | PlanEvent::Failed(_)) => None,

        (PlanState::Success(_) | PlanState::Failed(_), PlanEvent::Reset) => Some(PlanState::Idle),
        (PlanState::Idle | PlanState::Loading, PlanEvent::Reset) => None,
    }
}
