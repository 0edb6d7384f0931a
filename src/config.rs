use std::env;

use crate::error::{HomeworkError, Result};

/// Credentials loaded once at startup. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the Practicum homework API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Chat that receives every notification.
    pub telegram_chat_id: i64,
}

impl Config {
    /// Reads the three required variables from the environment. A missing,
    /// empty or unparseable value is a fatal configuration error.
    pub fn from_env() -> Result<Self> {
        let practicum_token = require_env("PRACTICUM_TOKEN")?;
        let telegram_token = require_env("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require_env("TELEGRAM_CHAT_ID")?
            .trim()
            .parse()
            .map_err(|_| HomeworkError::Configuration("TELEGRAM_CHAT_ID"))?;

        Ok(Config {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}

fn require_env(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(HomeworkError::Configuration(name)),
    }
}
