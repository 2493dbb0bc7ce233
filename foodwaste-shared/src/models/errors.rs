use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct ErrorBody {
    /// Human readable error message, shown to the user verbatim.
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Creates an error body carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// Returns the message untouched when it is present and not blank.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

/// Input problems detected before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are empty.
    #[error("Please fill in all fields")]
    MissingFields,
    /// An attendee count is not a whole number of zero or more.
    #[error("Attendee counts must be whole numbers of zero or more")]
    InvalidAttendeeCount,
    /// Fewer attendees were expected than actually came.
    #[error("Expected attendees cannot be less than actual attendees")]
    ExpectedBelowActual,
    /// The event type is not one the backend knows.
    #[error("Please choose a valid event type")]
    UnknownEventType,
    /// The charity search location is blank.
    #[error("Please enter a location")]
    MissingLocation,
    /// The email address has no `@`.
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Every way a backend interaction can fail, as seen by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected locally; the request never reached the network.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The backend rejected the credentials or bearer token.
    #[error("authentication failed")]
    Authentication,
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a failure status or a malformed body.
    #[error("server error ({status})")]
    Server {
        /// HTTP status code of the response.
        status: u16,
        /// Message from the `{error}` body, when one was sent.
        message: Option<String>,
    },
}

impl ClientError {
    /// Message to show the user, falling back to `fallback` when the error
    /// carries nothing more specific.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(error) => error.to_string(),
            Self::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the error means the held token is no longer valid.
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Whether the error was raised before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
