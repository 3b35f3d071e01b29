//! Profile form — raw field values and the input constraints applied on submit.

use career_models::{parse_skills, CareerProfile, ProfileError, MAX_DAILY_HOURS, MIN_DAILY_HOURS};
use thiserror::Error;

pub const DEFAULT_DAILY_HOURS: &str = "2";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Daily study hours must be a whole number, got '{0}'")]
    InvalidHours(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Field values exactly as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInput {
    pub degree: String,
    /// Comma-separated free text.
    pub skills: String,
    pub target_role: String,
    pub daily_hours: String,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            degree: String::new(),
            skills: String::new(),
            target_role: String::new(),
            daily_hours: DEFAULT_DAILY_HOURS.to_string(),
        }
    }
}

impl ProfileInput {
    /// Builds a profile, or reports the first constraint that blocks submission.
    ///
    /// Degree and target role are passed through untrimmed; only skills are
    /// normalized.
    pub fn submit(&self) -> Result<CareerProfile, FormError> {
        require(&self.degree, "Degree")?;
        require(&self.skills, "Skills")?;
        require(&self.target_role, "Target role")?;
        require(&self.daily_hours, "Daily study hours")?;

        let hours = self
            .daily_hours
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::InvalidHours(self.daily_hours.trim().to_string()))?;
        // Negative or huge whole numbers are a range problem, not a format one.
        let daily_hours = u32::try_from(hours)
            .ok()
            .filter(|h| (MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(h))
            .ok_or(ProfileError::DailyHoursOutOfRange(hours))?;

        let profile = CareerProfile {
            degree: self.degree.clone(),
            skills: parse_skills(&self.skills),
            target_role: self.target_role.clone(),
            daily_hours,
        };
        profile.validate()?;
        Ok(profile)
    }
}

fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}
