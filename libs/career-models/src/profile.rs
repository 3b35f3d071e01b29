use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_DAILY_HOURS: u32 = 1;
pub const MAX_DAILY_HOURS: u32 = 12;

/// The user's background and goal, posted to `/api/career-plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub degree: String,
    pub skills: Vec<String>,
    pub target_role: String,
    pub daily_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("{0} is required")]
    Blank(&'static str),

    #[error("Daily study hours must be between 1 and 12, got {0}")]
    DailyHoursOutOfRange(i64),
}

impl CareerProfile {
    /// Checks the constraints both the form and the API enforce.
    /// An empty skills list is allowed.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.degree.trim().is_empty() {
            return Err(ProfileError::Blank("Degree"));
        }
        if self.target_role.trim().is_empty() {
            return Err(ProfileError::Blank("Target role"));
        }
        if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&self.daily_hours) {
            return Err(ProfileError::DailyHoursOutOfRange(i64::from(self.daily_hours)));
        }
        Ok(())
    }
}

/// Splits free-text skills on commas, trimming each token and dropping empty ones.
/// Order and duplicates are preserved.
pub fn parse_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
