//! Session transitions against the backend and persisted storage.
//!
//! Each operation takes the current [`Session`] where it matters and returns
//! the next one; the caller owns the store and dispatches the result.

use crate::api::{AuthApi, FoodWasteClient};
use crate::config::FrontendConfig;
use crate::models::session::{AUTHENTICATION_FAILED, Session};
use crate::services::storage::{BrowserStorage, SessionStorage};
use shared::models::{AuthResponse, ClientError, LoginRequest, RegisterRequest};

/// Shown for any failed login that got past local validation.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
/// Shown for any failed registration that got past local validation.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Drives the session state machine.
#[derive(Debug, Clone)]
pub struct Authenticator<A, S> {
    api: A,
    storage: S,
}

/// The authenticator wired to the real backend and `localStorage`.
pub fn browser_authenticator() -> Authenticator<FoodWasteClient, BrowserStorage> {
    Authenticator::new(
        FoodWasteClient::shared(),
        BrowserStorage::new(&FrontendConfig::new()),
    )
}

impl<A, S> Authenticator<A, S>
where
    A: AuthApi,
    S: SessionStorage,
{
    pub fn new(api: A, storage: S) -> Self {
        Self { api, storage }
    }

    /// Restore the session persisted by an earlier page load.
    ///
    /// A stored token is only trusted once the backend resolves it to a user;
    /// any failure discards it.
    pub async fn load(&self) -> Session {
        let Some(token) = self.storage.token() else {
            return Session::anonymous();
        };

        match self.api.whoami(&token).await {
            Ok(user) => {
                self.persist(&token, &user);
                Session::authenticated(token, user)
            }
            Err(err) => {
                log::warn!("stored token rejected: {err}");
                self.storage.clear();
                Session::failed(AUTHENTICATION_FAILED)
            }
        }
    }

    /// Sign in with an email address or mobile number.
    ///
    /// On failure the current credentials are kept as they were.
    pub async fn login(&self, current: &Session, identifier: &str, password: &str) -> Session {
        let request = match LoginRequest::new(identifier, password) {
            Ok(request) => request,
            Err(err) => return current.settle_with_error(err.to_string()),
        };
        let result = self.api.login(&request).await;
        self.complete(current, result, INVALID_CREDENTIALS)
    }

    /// Create an account and sign in to it.
    ///
    /// On failure the current credentials are kept as they were.
    pub async fn register(
        &self,
        current: &Session,
        name: &str,
        email: &str,
        mobile: &str,
        password: &str,
    ) -> Session {
        let request = match RegisterRequest::new(name, email, mobile, password) {
            Ok(request) => request,
            Err(err) => return current.settle_with_error(err.to_string()),
        };
        let result = self.api.register(&request).await;
        self.complete(current, result, REGISTRATION_FAILED)
    }

    /// Forget the session locally. No request is made and nothing can fail.
    pub fn logout(&self) -> Session {
        self.storage.clear();
        log::info!("signed out");
        Session::anonymous()
    }

    /// Drop a session the backend no longer accepts.
    pub fn expire(&self) -> Session {
        self.storage.clear();
        log::warn!("session expired");
        Session::failed(AUTHENTICATION_FAILED)
    }

    fn complete(
        &self,
        current: &Session,
        result: Result<AuthResponse, ClientError>,
        failure: &str,
    ) -> Session {
        match result {
            Ok(AuthResponse { token, user }) => {
                self.persist(&token, &user);
                log::info!("signed in as {}", user.id);
                Session::authenticated(token, user)
            }
            Err(err) => {
                log::warn!("authentication request failed: {err}");
                current.settle_with_error(failure)
            }
        }
    }

    fn persist(&self, token: &str, user: &shared::models::User) {
        if let Err(err) = self.storage.save(token, user) {
            log::warn!("session not persisted: {err}");
        }
    }
}
