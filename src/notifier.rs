//! Delivery of rendered messages to the configured Telegram chat.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{debug, error};

/// Outbound message transport. Production uses a teloxide [`Bot`]; tests
/// substitute a recorder.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Sends `text` to `chat_id`.
    async fn send(&self, chat_id: ChatId, text: &str) -> anyhow::Result<()>;
}

/// [`MessageSender`] backed by the Telegram bot API.
#[derive(Debug, Clone)]
pub struct TelegramSender {
    bot: Bot,
}

impl TelegramSender {
    /// Wraps an already constructed bot.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send(&self, chat_id: ChatId, text: &str) -> anyhow::Result<()> {
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }
}

/// Sends notifications to one fixed chat and never lets a delivery failure
/// escape: a failed send is logged and dropped for that cycle.
pub struct Notifier<S> {
    sender: S,
    chat_id: ChatId,
}

impl<S: MessageSender> Notifier<S> {
    /// Notifier for a fixed chat.
    pub fn new(sender: S, chat_id: ChatId) -> Self {
        Self { sender, chat_id }
    }

    /// Delivers `message`, swallowing any transport error.
    pub async fn notify(&self, message: &str) {
        match self.sender.send(self.chat_id, message).await {
            Ok(()) => debug!("bot sent message: {message}"),
            Err(err) => error!("failed to deliver telegram message: {err}"),
        }
    }
}
