//! HTTP client for the Practicum homework status endpoint.

use chrono::Utc;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::error;

use crate::error::{HomeworkError, Result};

/// Production endpoint for homework statuses.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Thin client around the single `homework_statuses` endpoint.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Client against the production endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoint(token, ENDPOINT)
    }

    /// Client against an arbitrary endpoint. Tests point this at a local
    /// mock server.
    pub fn with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Fetches homework updates since `cursor` (a UNIX timestamp). A zero
    /// cursor is replaced with the current wall-clock time.
    ///
    /// Decodes the body to JSON but does not validate its fields; shape
    /// checks belong to [`crate::homework::check_response`].
    pub async fn fetch(&self, cursor: i64) -> Result<Value> {
        let timestamp = if cursor == 0 {
            Utc::now().timestamp()
        } else {
            cursor
        };

        let response = match self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!("request to the homework API failed: {err}");
                return Err(HomeworkError::Transport(err.to_string()));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            error!("homework API answered with status {status}");
            return Err(HomeworkError::HttpStatus(status.as_u16()));
        }

        match response.json::<Value>().await {
            Ok(payload) => Ok(payload),
            Err(err) => {
                error!("failed to decode homework API response as JSON: {err}");
                Err(HomeworkError::Decode)
            }
        }
    }
}
