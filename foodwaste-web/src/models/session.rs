use shared::models::User;
use std::fmt;
use yewdux::Store;

/// Message shown when a stored token no longer resolves to a user.
pub const AUTHENTICATION_FAILED: &str = "Authentication failed";

/// A bearer token and the user it resolved to. Only ever held together.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    user: User,
}

impl Credentials {
    pub fn new(token: String, user: User) -> Self {
        Self { token, user }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// The client's authentication state.
///
/// Token and user live in one optional [`Credentials`], so a user without a
/// token (or the reverse) cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Store)]
pub struct Session {
    credentials: Option<Credentials>,
    /// A transition is in progress.
    pub loading: bool,
    /// Message from the last failed transition.
    pub error: Option<String>,
}

impl Default for Session {
    /// A page load starts out resolving whatever token was persisted.
    fn default() -> Self {
        Self::resolving()
    }
}

impl Session {
    /// Waiting for the persisted token to be checked.
    pub fn resolving() -> Self {
        Self {
            credentials: None,
            loading: true,
            error: None,
        }
    }

    /// Settled with nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            credentials: None,
            loading: false,
            error: None,
        }
    }

    /// Settled with a signed-in user.
    pub fn authenticated(token: String, user: User) -> Self {
        Self {
            credentials: Some(Credentials::new(token, user)),
            loading: false,
            error: None,
        }
    }

    /// Settled with nobody signed in after the stored token was rejected.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            credentials: None,
            loading: false,
            error: Some(error.into()),
        }
    }

    /// The same credentials, marked busy with the error cleared.
    #[must_use]
    pub fn begin(&self) -> Self {
        Self {
            credentials: self.credentials.clone(),
            loading: true,
            error: None,
        }
    }

    /// The same credentials, settled with an error.
    #[must_use]
    pub fn settle_with_error(&self, error: impl Into<String>) -> Self {
        Self {
            credentials: self.credentials.clone(),
            loading: false,
            error: Some(error.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::token)
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(Credentials::user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "42".to_string(),
            email: "cook@example.com".to_string(),
            name: Some("Asha".to_string()),
            mobile: None,
        }
    }

    fn assert_invariant(session: &Session) {
        assert_eq!(session.token().is_some(), session.user().is_some());
        assert_eq!(session.is_authenticated(), session.user().is_some());
    }

    #[test]
    fn default_is_resolving() {
        let session = Session::default();
        assert!(session.loading);
        assert!(!session.is_authenticated());
        assert_invariant(&session);
    }

    #[test]
    fn constructors_keep_token_and_user_together() {
        let sessions = [
            Session::resolving(),
            Session::anonymous(),
            Session::authenticated("jwt".to_string(), user()),
            Session::failed(AUTHENTICATION_FAILED),
        ];
        for session in &sessions {
            assert_invariant(session);
        }
    }

    #[test]
    fn begin_keeps_credentials_and_clears_error() {
        let session = Session::authenticated("jwt".to_string(), user())
            .settle_with_error("boom")
            .begin();
        assert!(session.loading);
        assert_eq!(session.error, None);
        assert_eq!(session.token(), Some("jwt"));
        assert_invariant(&session);
    }

    #[test]
    fn debug_output_hides_token() {
        let session = Session::authenticated("secret-jwt".to_string(), user());
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-jwt"));
        assert!(rendered.contains("cook@example.com"));
    }
}
