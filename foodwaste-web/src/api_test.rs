//! Tests for the API client
//!
//! Covers URL construction and bearer token bookkeeping. Response mapping is
//! covered where it lives, in `shared::models::response`.

#[cfg(test)]
mod tests {
    use crate::api::FoodWasteClient;

    #[test]
    fn test_api_url_joins_paths() {
        let client = FoodWasteClient::new("http://localhost:5000/api/");
        assert_eq!(
            client.api_url("/auth/login"),
            "http://localhost:5000/api/auth/login"
        );
        assert_eq!(
            client.api_url("predict/find-charities"),
            "http://localhost:5000/api/predict/find-charities"
        );
    }

    #[test]
    fn test_relative_base_url() {
        let client = FoodWasteClient::new("/api");
        assert_eq!(client.api_url("auth/me"), "/api/auth/me");
    }

    #[test]
    fn test_bearer_token_can_be_set_and_cleared() {
        let client = FoodWasteClient::new("/api");
        assert_eq!(client.current_bearer_token(), None);

        client.set_bearer_token(Some("jwt".to_string()));
        assert_eq!(client.current_bearer_token().as_deref(), Some("jwt"));

        client.set_bearer_token(None);
        assert_eq!(client.current_bearer_token(), None);
    }

    #[test]
    fn test_clones_share_the_bearer_token() {
        let client = FoodWasteClient::new("/api");
        let clone = client.clone();
        client.set_bearer_token(Some("jwt".to_string()));
        assert_eq!(clone.current_bearer_token().as_deref(), Some("jwt"));
    }
}
