//! Plan request controller — drives one request/render cycle through the
//! `PlanState` reducer and publishes every transition on a watch channel.

use std::sync::Arc;

use career_models::CareerProfile;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::client::PlanService;
use crate::state::{reduce, PlanEvent, PlanState};

pub struct PlanRequestController {
    service: Arc<dyn PlanService>,
    state: watch::Sender<PlanState>,
}

impl PlanRequestController {
    pub fn new(service: Arc<dyn PlanService>) -> Self {
        let (state, _) = watch::channel(PlanState::default());
        Self { service, state }
    }

    /// Current state snapshot.
    pub fn state(&self) -> PlanState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every transition, including `Loading`.
    pub fn subscribe(&self) -> watch::Receiver<PlanState> {
        self.state.subscribe()
    }

    /// Runs one submission to completion.
    ///
    /// Returns `false` without touching the network when a request is already
    /// in flight.
    pub async fn submit(&self, profile: &CareerProfile) -> bool {
        if !self.dispatch(PlanEvent::Submitted) {
            warn!("Ignoring submit while a plan request is in flight");
            return false;
        }

        let event = match self.service.request_plan(profile).await {
            Ok(roadmap) => {
                info!(weeks = roadmap.study_plan.len(), "Career plan received");
                PlanEvent::Succeeded(roadmap)
            }
            Err(e) => {
                warn!("Career plan request failed: {e}");
                PlanEvent::Failed(e.user_message())
            }
        };
        self.dispatch(event);
        true
    }

    /// Returns to `Idle` from a settled state. No effect while loading.
    pub fn reset(&self) -> bool {
        self.dispatch(PlanEvent::Reset)
    }

    fn dispatch(&self, event: PlanEvent) -> bool {
        self.state
            .send_if_modified(|current| match reduce(current, event) {
                Some(next) => {
                    *current = next;
                    true
                }
                None => false,
            })
    }
}
