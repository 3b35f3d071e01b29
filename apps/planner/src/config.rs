use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the roadmap API. Used as-is; not checked for well-formedness.
    pub api_base_url: String,
    pub rust_log: String,
}

impl Config {
    /// Loads configuration, preferring an explicit base URL over `API_BASE_URL`.
    pub fn load(api_base_url: Option<String>) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_base_url = match api_base_url {
            Some(url) => url,
            None => require_env("API_BASE_URL")?,
        };

        Ok(Config {
            api_base_url,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| {
        format!("Required environment variable '{key}' is not set (or pass --api-base-url)")
    })
}
