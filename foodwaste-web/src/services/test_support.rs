//! Scripted backend for service tests.

use crate::api::{AuthApi, WastageApi};
use async_trait::async_trait;
use shared::models::{
    AuthResponse, CharitySearch, CharitySearchResponse, ClientError, LoginRequest,
    PredictionRequest, PredictionResult, RegisterRequest, User,
};
use std::cell::{Cell, RefCell};

pub(crate) fn user() -> User {
    User {
        id: "6650f0c2a1".to_string(),
        email: "cook@example.com".to_string(),
        name: Some("Asha".to_string()),
        mobile: None,
    }
}

pub(crate) fn auth_response(token: &str) -> AuthResponse {
    AuthResponse {
        token: token.to_string(),
        user: user(),
    }
}

/// Answers every call with the configured result and counts the calls.
#[derive(Debug)]
pub(crate) struct FakeBackend {
    pub(crate) whoami: Result<User, ClientError>,
    pub(crate) auth: Result<AuthResponse, ClientError>,
    pub(crate) prediction: Result<PredictionResult, ClientError>,
    pub(crate) charities: Result<CharitySearchResponse, ClientError>,
    pub(crate) calls: Cell<usize>,
    pub(crate) last_search: RefCell<Option<CharitySearch>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            whoami: Ok(user()),
            auth: Ok(auth_response("fresh-token")),
            prediction: Err(ClientError::Network("not scripted".to_string())),
            charities: Ok(CharitySearchResponse::default()),
            calls: Cell::new(0),
            last_search: RefCell::new(None),
        }
    }
}

impl FakeBackend {
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn last_search(&self) -> Option<CharitySearch> {
        self.last_search.borrow().clone()
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeBackend {
    async fn whoami(&self, _token: &str) -> Result<User, ClientError> {
        self.record();
        self.whoami.clone()
    }

    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.record();
        self.auth.clone()
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.record();
        self.auth.clone()
    }
}

#[async_trait(?Send)]
impl WastageApi for FakeBackend {
    async fn predict_wastage(
        &self,
        _request: &PredictionRequest,
    ) -> Result<PredictionResult, ClientError> {
        self.record();
        self.prediction.clone()
    }

    async fn find_charities(
        &self,
        search: &CharitySearch,
    ) -> Result<CharitySearchResponse, ClientError> {
        self.record();
        self.last_search.replace(Some(search.clone()));
        self.charities.clone()
    }
}
