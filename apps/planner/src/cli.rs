use clap::Parser;

use crate::form::{ProfileInput, DEFAULT_DAILY_HOURS};

#[derive(Parser, Debug)]
#[command(
    name = "career-plan",
    version,
    about = "Generate a personalized 4-week career roadmap"
)]
pub struct Cli {
    #[arg(long, help = "Roadmap API base URL (overrides API_BASE_URL)")]
    pub api_base_url: Option<String>,
    #[arg(long, help = "Current degree or major")]
    pub degree: Option<String>,
    #[arg(long, help = "Current skills, comma separated")]
    pub skills: Option<String>,
    #[arg(long, help = "Role you want to land")]
    pub target_role: Option<String>,
    #[arg(long, default_value = DEFAULT_DAILY_HOURS, help = "Daily study hours (1-12)")]
    pub daily_hours: String,
    #[arg(long, help = "Print the roadmap as JSON instead of text")]
    pub json: bool,
}

impl Cli {
    /// Form values prefilled from the flags.
    pub fn profile_input(&self) -> ProfileInput {
        ProfileInput {
            degree: self.degree.clone().unwrap_or_default(),
            skills: self.skills.clone().unwrap_or_default(),
            target_role: self.target_role.clone().unwrap_or_default(),
            daily_hours: self.daily_hours.clone(),
        }
    }

    /// All text fields were given on the command line, so no prompting is needed.
    pub fn is_one_shot(&self) -> bool {
        self.degree.is_some() && self.skills.is_some() && self.target_role.is_some()
    }
}
