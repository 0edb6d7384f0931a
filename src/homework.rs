//! Response validation, homework status parsing and the verdict catalog.
//!
//! The API payload stays a [`serde_json::Value`] through this layer so every
//! shape problem maps to its own typed error instead of one opaque
//! deserialization failure.

use serde_json::Value;
use tracing::{error, warn};

use crate::error::{HomeworkError, Result};

/// Verdict text for a recognized status code, `None` otherwise.
pub fn verdict(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Shape-checks a decoded API payload and returns the homework list verbatim.
///
/// Individual records are not validated here; that happens per record in
/// [`parse_status`].
pub fn check_response(response: &Value) -> Result<&Vec<Value>> {
    let Some(object) = response.as_object() else {
        error!("API response is not a JSON object");
        return Err(HomeworkError::TypeMismatch("Некорректный тип"));
    };

    let Some(homeworks) = object.get("homeworks") else {
        error!("API response is missing the homeworks key");
        return Err(HomeworkError::MissingKey);
    };

    let Some(homeworks) = homeworks.as_array() else {
        error!("homeworks field of the API response is not a list");
        return Err(HomeworkError::TypeMismatch("Формат ответа не соответствует"));
    };

    Ok(homeworks)
}

/// Renders the notification text for one homework record.
///
/// The name is checked first: a record without a non-empty `homework_name`
/// always fails, before the status is even looked at.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = match homework.get("homework_name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name,
        _ => {
            warn!("homework record has no usable homework_name");
            return Err(HomeworkError::MissingName);
        }
    };

    // A present but non-string status falls through to the catalog lookup
    // and surfaces as an unknown status, same as an unrecognized code.
    let status = match homework.get("status") {
        Some(value) => value.as_str().unwrap_or(""),
        None => {
            error!("homework record {name:?} has no status key");
            return Err(HomeworkError::MissingStatus);
        }
    };

    let Some(verdict) = verdict(status) else {
        error!("homework record {name:?} carries undocumented status {status:?}");
        return Err(HomeworkError::UnknownStatus);
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}
