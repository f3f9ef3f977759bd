//! Envelope normalization: pulling the useful payload out of `{entity: ...}` bodies
//! and turning failure envelopes into one user-visible string.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApplicationError, EnvelopeParseError, TransportError};

const FALLBACK_ERROR: &str = "Server error";

/// Canonical payload of a success response.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// Array found under one of the collection's list keys.
    List(Vec<Value>),
    /// `entity.message` of an action endpoint.
    Message(String),
    /// Neither shape matched; the decoded body as-is.
    Body(Value),
}

impl Extracted {
    pub fn into_list<T: DeserializeOwned>(self) -> Result<Vec<T>, EnvelopeParseError> {
        match self {
            Extracted::List(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<T>, _>>()
                .map_err(|err| EnvelopeParseError::Unexpected {
                    kind: "list",
                    reason: err.to_string(),
                }),
            Extracted::Message(msg) => Err(EnvelopeParseError::Unexpected {
                kind: "list",
                reason: format!("got message '{}'", msg),
            }),
            Extracted::Body(_) => Err(EnvelopeParseError::MissingKey("<list>".to_string())),
        }
    }

    pub fn into_message(self) -> Result<String, EnvelopeParseError> {
        match self {
            Extracted::Message(msg) => Ok(msg),
            _ => Err(EnvelopeParseError::MissingMessage),
        }
    }
}

/// Extracts the payload in fixed priority order: the first of `list_keys` present in
/// `entity` as an array, then `entity.message`, then the body unmodified.
pub fn extract(mut body: Value, list_keys: &[&str]) -> Extracted {
    if let Some(entity) = body.get_mut("entity").and_then(Value::as_object_mut) {
        for key in list_keys {
            if matches!(entity.get(*key), Some(Value::Array(_)))
                && let Some(Value::Array(items)) = entity.remove(*key)
            {
                return Extracted::List(items);
            }
        }
        match entity.get("message") {
            Some(Value::String(msg)) => return Extracted::Message(msg.clone()),
            Some(Value::Null) | None => {}
            Some(other) => return Extracted::Message(other.to_string()),
        }
    }
    Extracted::Body(body)
}

/// Pulls `entity.<key>` out of a single-item response.
pub fn extract_item(mut body: Value, key: &str) -> Result<Value, EnvelopeParseError> {
    body.get_mut("entity")
        .and_then(Value::as_object_mut)
        .and_then(|entity| entity.remove(key))
        .filter(|v| !v.is_null())
        .ok_or_else(|| EnvelopeParseError::MissingKey(key.to_string()))
}

/// Names of the entities referencing a resource: `entity.instances`, else a
/// top-level `instances` array.
pub fn extract_related(mut body: Value) -> Result<Vec<String>, EnvelopeParseError> {
    let nested = body
        .get_mut("entity")
        .and_then(|entity| entity.get_mut("instances"))
        .filter(|v| v.is_array())
        .map(Value::take);
    let items = match nested {
        Some(items) => items,
        None => body
            .get_mut("instances")
            .filter(|v| v.is_array())
            .map(Value::take)
            .ok_or_else(|| EnvelopeParseError::MissingKey("instances".to_string()))?,
    };
    serde_json::from_value(items).map_err(|err| EnvelopeParseError::Unexpected {
        kind: "related",
        reason: err.to_string(),
    })
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    entity: ErrorEntity,
}

#[derive(Deserialize)]
struct ErrorEntity {
    message: String,
}

/// Parses `{entity: {message}}`.
pub fn parse_error_envelope(raw: &str) -> Result<ApplicationError, EnvelopeParseError> {
    let env: ErrorEnvelope = serde_json::from_str(raw).map_err(|err| {
        if err.is_data() {
            EnvelopeParseError::MissingMessage
        } else {
            EnvelopeParseError::NotJson(err.to_string())
        }
    })?;
    Ok(ApplicationError {
        message: env.entity.message,
    })
}

/// The string the error mapping starts from: raw body, else `"{status} - {statusText}"`,
/// else a generic message.
fn error_candidate(err: &TransportError) -> String {
    match err.body.as_deref() {
        Some(body) if !body.is_empty() => body.to_string(),
        _ if err.status != 0 => format!("{} - {}", err.status, err.status_text),
        _ => FALLBACK_ERROR.to_string(),
    }
}

/// Maps a transport failure to the single string shown to the user.
///
/// A candidate that is not a `{entity: {message}}` envelope degrades to the candidate
/// text itself instead of failing.
pub fn map_error(err: &TransportError) -> String {
    let candidate = error_candidate(err);
    match parse_error_envelope(&candidate) {
        Ok(app) => app.message,
        Err(parse_err) => {
            tracing::debug!(error = %parse_err, status = err.status, "unstructured error body");
            let trimmed = candidate.trim();
            if trimmed.is_empty() {
                FALLBACK_ERROR.to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/remote/envelope_tests.rs"]
mod tests;
