//! Error taxonomy for the resource-access layer.
//!
//! Only [`map_error`](super::map_error) and [`ConsoleError::into_message`] cross the
//! public service boundary; callers see a single human-readable string.

/// Network or HTTP-level failure.
///
/// `status` is 0 when no response arrived at all (connect refused, DNS, reset), in
/// which case `status_text` carries the underlying cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.describe())]
pub struct TransportError {
    pub status: u16,
    pub status_text: String,
    pub body: Option<String>,
}

impl TransportError {
    pub fn network(cause: impl Into<String>) -> Self {
        Self {
            status: 0,
            status_text: cause.into(),
            body: None,
        }
    }

    pub fn is_network(&self) -> bool {
        self.status == 0
    }

    fn describe(&self) -> String {
        if self.is_network() {
            format!("network error: {}", self.status_text)
        } else {
            format!("{} - {}", self.status, self.status_text)
        }
    }
}

/// A response body did not match the envelope shape it was expected to have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeParseError {
    #[error("response is not valid JSON: {0}")]
    NotJson(String),

    #[error("response has no entity.message")]
    MissingMessage,

    #[error("response has no entity.{0}")]
    MissingKey(String),

    #[error("unexpected {kind} payload: {reason}")]
    Unexpected { kind: &'static str, reason: String },
}

/// The server understood the request and refused it with a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApplicationError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("response has no content-disposition header")]
    MissingHeader,

    #[error("content-disposition has no filename: {0}")]
    MissingFilename(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Envelope(#[from] EnvelopeParseError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Path(#[from] crate::model::PathError),

    #[error(transparent)]
    Download(#[from] DownloadError),
}

impl ConsoleError {
    /// Collapses the error into the single string surfaced to the user.
    pub fn into_message(self) -> String {
        match self {
            ConsoleError::Transport(err) => super::envelope::map_error(&err),
            ConsoleError::Application(err) => err.message,
            other => other.to_string(),
        }
    }
}
