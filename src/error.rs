//! Error taxonomy shared by the API client, response validation and the
//! polling loop.
//!
//! Cycle-level variants carry the Russian user-facing text in their
//! `Display` impl because the watcher embeds them verbatim into the
//! error notification sent to the chat.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HomeworkError>;

/// Everything that can go wrong between startup and a delivered notification.
#[derive(Debug, Error)]
pub enum HomeworkError {
    /// A required environment variable is missing, empty or unparseable.
    /// Fatal: the bot refuses to start.
    #[error("missing or invalid environment variable {0}")]
    Configuration(&'static str),

    /// The request to the homework API could not be completed at all
    /// (DNS, connect, timeout). Embeds the underlying transport error.
    #[error("Ошибка при запросе к основному API: {0}")]
    Transport(String),

    /// The homework API answered with a non-200 status code.
    #[error("Ошибка {0}")]
    HttpStatus(u16),

    /// The response body was not valid JSON.
    #[error("Ошибка парсинга ответа из формата json")]
    Decode,

    /// The decoded payload has the wrong shape (not an object, or the
    /// homework list is not an array). The message differs per call site.
    #[error("{0}")]
    TypeMismatch(&'static str),

    /// The payload lacks the required `homeworks` key.
    #[error("Отсутствуют ожидаемые ключи в ответе")]
    MissingKey,

    /// A homework record has no usable `homework_name`.
    #[error("Отсутствует имя домашней работы")]
    MissingName,

    /// A homework record has no `status` key at all.
    #[error("Отсутствует ключ homework_status")]
    MissingStatus,

    /// The status code is none of the documented verdicts. The message is
    /// deliberately fixed so that consecutive unknown statuses deduplicate
    /// into a single chat notification.
    #[error("Недокументированный статус домашней работы")]
    UnknownStatus,
}
