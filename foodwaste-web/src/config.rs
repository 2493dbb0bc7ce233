//! Frontend configuration module
//!
//! Settings are baked in at compile time from environment variables, falling
//! back to defaults that match the backend's routing.

use log::LevelFilter;
use std::str::FromStr;

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_GEOLOCATION_TIMEOUT_MS: u32 = 5_000;

/// Frontend configuration for the API, storage, and device integrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL every API path is joined onto.
    pub api_base_url: String,
    /// Maximum level forwarded to the browser console.
    pub log_level: LevelFilter,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
    /// `localStorage` key holding the cached user record.
    pub user_key: String,
    /// How long to wait for a geolocation fix.
    pub geolocation_timeout_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("FOODWASTE_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            log_level: parse_level(option_env!("FOODWASTE_LOG_LEVEL")),
            token_key: "token".to_string(),
            user_key: "user".to_string(),
            geolocation_timeout_ms: DEFAULT_GEOLOCATION_TIMEOUT_MS,
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL without a trailing slash
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|level| LevelFilter::from_str(level.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url().is_empty());
        assert_eq!(config.token_key, "token");
        assert_eq!(config.user_key, "user");
        assert_eq!(config.geolocation_timeout_ms, 5_000);
    }

    #[test]
    fn test_api_base_url_trims_trailing_slash() {
        let config = FrontendConfig {
            api_base_url: "https://food.example.org/api/".to_string(),
            ..FrontendConfig::new()
        };
        assert_eq!(config.api_base_url(), "https://food.example.org/api");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }
}
