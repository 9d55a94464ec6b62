use std::env;

use crate::error::AppError;

/// Runtime configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base: String,
    pub database_url: String,
    pub ai: AiConfig,
    pub notification_poll_secs: u64,
    pub roster_poll_secs: u64,
}

/// Generative-AI settings. A missing key selects the mock client.
#[derive(Clone, Debug)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let api_base = env::var("MENTORLINK_API_BASE")
            .map_err(|_| AppError::BadRequest("MENTORLINK_API_BASE is not set".to_string()))?;
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://mentorlink.db".to_string());

        let ai = AiConfig {
            api_key: env::var("AI_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: env::var("AI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            model: env::var("AI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
        };

        Ok(Self {
            api_base,
            database_url,
            ai,
            notification_poll_secs: parse_secs("NOTIFICATION_POLL_SECS", 10),
            roster_poll_secs: parse_secs("ROSTER_POLL_SECS", 15),
        })
    }
}

fn parse_secs(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
