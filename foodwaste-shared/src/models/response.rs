//! Interpretation of raw backend responses.
//!
//! The HTTP layer reads the status and body text and hands them here, so the
//! mapping onto [`ClientError`] stays independent of any transport.

use serde::de::DeserializeOwned;

use super::errors::{ClientError, ErrorBody};

/// Post-deserialisation checks on a response payload.
///
/// Deserialisation guarantees the shape; this catches values that parse but
/// cannot be displayed sensibly.
pub trait Validate {
    /// Returns `true` when the payload is fit to hand to the view layer.
    fn is_valid(&self) -> bool {
        true
    }
}

/// Maps a response status and body onto a typed payload or a [`ClientError`].
///
/// # Errors
/// - [`ClientError::Authentication`] for `401`.
/// - [`ClientError::Server`] for any other non-2xx status, carrying the
///   `{error}` message when the body has one.
/// - [`ClientError::Server`] without a message when a 2xx body does not match
///   `T` or fails [`Validate::is_valid`].
pub fn decode_response<T>(status: u16, body: &str) -> Result<T, ClientError>
where
    T: DeserializeOwned + Validate,
{
    if status == 401 {
        return Err(ClientError::Authentication);
    }

    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|error| error.message().map(ToString::to_string));
        return Err(ClientError::Server { status, message });
    }

    match serde_json::from_str::<T>(body) {
        Ok(payload) if payload.is_valid() => Ok(payload),
        _ => Err(ClientError::Server {
            status,
            message: None,
        }),
    }
}
