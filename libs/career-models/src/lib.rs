//! Wire types shared by the planner client and the roadmap API.
//!
//! Both sides serialize the same shapes, so the profile the client posts and the
//! roadmap the API returns are defined once here.

pub mod profile;
pub mod roadmap;

pub use profile::{parse_skills, CareerProfile, ProfileError, MAX_DAILY_HOURS, MIN_DAILY_HOURS};
pub use roadmap::{CareerRoadmap, RoadmapError, WeeklyPlan};
