use crate::config::FrontendConfig;
use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::models::{
    AuthResponse, CharitySearch, CharitySearchResponse, ClientError, LoginRequest,
    PredictionRequest, PredictionResult, RegisterRequest, User, Validate, decode_response,
};
use std::sync::{Arc, Mutex};

thread_local! {
    static SHARED_CLIENT: OnceCell<FoodWasteClient> = const { OnceCell::new() };
}

/// Account endpoints the session service depends on.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Resolve the user a bearer token belongs to.
    async fn whoami(&self, token: &str) -> Result<User, ClientError>;

    /// Exchange credentials for a token.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError>;

    /// Create an account and receive a token for it.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError>;
}

/// Prediction and charity endpoints behind the two form controllers.
#[async_trait(?Send)]
pub trait WastageApi {
    /// Ask the backend to estimate surplus food for an event.
    async fn predict_wastage(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ClientError>;

    /// Find charities near a place name or a device position.
    async fn find_charities(
        &self,
        search: &CharitySearch,
    ) -> Result<CharitySearchResponse, ClientError>;
}

/// Lightweight API client for FoodWaste web interactions.
#[derive(Clone, Debug)]
pub struct FoodWasteClient {
    base_url: String,
    client: Client,
    bearer_token: Arc<Mutex<Option<String>>>,
}

impl FoodWasteClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            bearer_token: Arc::new(Mutex::new(None)),
        }
    }

    /// The per-thread client shared by every component.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&absolute_base(FrontendConfig::new().api_base_url())))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Set or clear the token sent with every request.
    pub fn set_bearer_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.bearer_token.lock() {
            *guard = token;
        }
    }

    pub(crate) fn current_bearer_token(&self) -> Option<String> {
        self.bearer_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.current_bearer_token() {
            Some(token) => with_bearer(request, &token),
            None => request,
        }
    }

    async fn execute<T>(&self, request: RequestBuilder) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Validate,
    {
        let response = request.send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;
        let decoded = decode_response(status, &body);
        if let Err(ClientError::Server { status, .. }) = &decoded {
            log::warn!("request failed with status {status}");
        }
        decoded
    }
}

/// Resolve a path-only base against the page origin, since requests need an
/// absolute URL.
fn absolute_base(base: &str) -> String {
    if base.starts_with('/')
        && let Some(origin) = web_sys::window().and_then(|window| window.location().origin().ok())
    {
        return format!("{origin}{base}");
    }
    base.to_string()
}

fn with_bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
    request.header("Authorization", format!("Bearer {token}"))
}

fn network_error(err: reqwest::Error) -> ClientError {
    log::error!("network error: {err}");
    ClientError::Network(err.to_string())
}

#[async_trait(?Send)]
impl AuthApi for FoodWasteClient {
    async fn whoami(&self, token: &str) -> Result<User, ClientError> {
        let url = self.api_url("auth/me");
        self.execute(with_bearer(self.client.get(url), token)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let url = self.api_url("auth/login");
        self.execute(self.client.post(url).json(request)).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let url = self.api_url("auth/register");
        self.execute(self.client.post(url).json(request)).await
    }
}

#[async_trait(?Send)]
impl WastageApi for FoodWasteClient {
    async fn predict_wastage(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ClientError> {
        let url = self.api_url("predict/predict-wastage");
        self.execute(self.authorize(self.client.post(url).json(request)))
            .await
    }

    async fn find_charities(
        &self,
        search: &CharitySearch,
    ) -> Result<CharitySearchResponse, ClientError> {
        let url = self.api_url("predict/find-charities");
        let request = match search {
            CharitySearch::Location(location) => self
                .client
                .get(url)
                .query(&[("location", location.as_str())]),
            CharitySearch::Near(coordinates) => self.client.post(url).json(coordinates),
        };
        self.execute(self.authorize(request)).await
    }
}
