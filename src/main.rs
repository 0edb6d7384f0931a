//! Entry point: logging, configuration, then the polling loop.

use anyhow::Result;
use teloxide::types::ChatId;
use teloxide::Bot;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homework_status_bot::api::PracticumClient;
use homework_status_bot::config::Config;
use homework_status_bot::notifier::{Notifier, TelegramSender};
use homework_status_bot::watcher::StatusWatcher;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_status_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("refusing to start: {err}");
            return Err(err.into());
        }
    };

    info!("Starting homework status bot v{}", env!("CARGO_PKG_VERSION"));

    let bot = Bot::new(&config.telegram_token);
    let api = PracticumClient::new(&config.practicum_token);
    let notifier = Notifier::new(TelegramSender::new(bot), ChatId(config.telegram_chat_id));

    let mut watcher = StatusWatcher::new(api, notifier);
    watcher.run().await;

    info!("Application stopped");
    Ok(())
}
