//! The polling loop: fetch, validate, parse, notify, sleep, repeat.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use crate::api::PracticumClient;
use crate::error::Result;
use crate::homework::{check_response, parse_status};
use crate::notifier::{MessageSender, Notifier};

/// Fixed sleep between polling cycles.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Cache key reserved for the last reported cycle failure. Shares the map
/// with per-homework keys; homework names never collide with it in practice.
const ERROR_KEY: &str = "error";

/// What a finished cycle means for the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Keep polling.
    Running,
    /// Terminal: the loop exits after the trailing sleep.
    Stopped,
}

/// Drives the whole pipeline once per cycle and owns all loop state: the
/// incremental cursor and the dedup cache.
pub struct StatusWatcher<S> {
    api: PracticumClient,
    notifier: Notifier<S>,
    /// Last message sent per dedup key; never persisted.
    last_sent: HashMap<String, String>,
    cursor: i64,
    retry_period: Duration,
}

impl<S: MessageSender> StatusWatcher<S> {
    /// Watcher starting from the current wall-clock time.
    pub fn new(api: PracticumClient, notifier: Notifier<S>) -> Self {
        Self {
            api,
            notifier,
            last_sent: HashMap::new(),
            cursor: Utc::now().timestamp(),
            retry_period: RETRY_PERIOD,
        }
    }

    /// Overrides the initial cursor.
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    /// Current lower bound of the next fetch window.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Runs until the process is killed or a cycle reports
    /// [`CycleOutcome::Stopped`]. Sleeps after every cycle, including the
    /// last one.
    pub async fn run(&mut self) {
        loop {
            let outcome = self.run_cycle().await;
            tokio::time::sleep(self.retry_period).await;
            if outcome == CycleOutcome::Stopped {
                break;
            }
        }
    }

    /// One polling cycle. Any pipeline error is rendered into a chat
    /// notification, deduplicated against the last reported failure; a clean
    /// cycle clears that dedup entry so the same failure reports again later.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(CycleOutcome::Stopped) => CycleOutcome::Stopped,
            Ok(CycleOutcome::Running) => {
                self.last_sent.remove(ERROR_KEY);
                CycleOutcome::Running
            }
            Err(err) => {
                let message = format!("Сбой в работе программы: {err}");
                if self.last_sent.get(ERROR_KEY) != Some(&message) {
                    self.notifier.notify(&message).await;
                    self.last_sent.insert(ERROR_KEY.to_owned(), message);
                }
                CycleOutcome::Running
            }
        }
    }

    async fn poll_once(&mut self) -> Result<CycleOutcome> {
        let response = self.api.fetch(self.cursor).await?;
        let homeworks = check_response(&response)?;

        if homeworks.is_empty() {
            debug!("API response is empty, no homeworks to report");
            return Ok(CycleOutcome::Stopped);
        }

        for homework in homeworks {
            let message = parse_status(homework)?;
            // parse_status guarantees a non-empty string name.
            let name = homework
                .get("homework_name")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if self.last_sent.get(name) != Some(&message) {
                self.notifier.notify(&message).await;
                self.last_sent.insert(name.to_owned(), message);
            }
        }

        if let Some(current_date) = response.get("current_date").and_then(Value::as_i64) {
            self.cursor = current_date;
        }

        Ok(CycleOutcome::Running)
    }
}
