use crate::api::WastageApi;
use crate::models::session::AUTHENTICATION_FAILED;
use crate::services::geolocation::GeolocationError;
use shared::models::{Charity, CharitySearch, CharitySearchResponse, ClientError};

/// Shown when a search succeeds but finds nothing.
pub const NO_CHARITIES_FOUND: &str =
    "No charities or old age homes found in this area. Please try a different location.";
/// Shown when a place-name search fails.
pub const CHARITY_FETCH_FAILED: &str = "Failed to fetch charities. Please try again.";

/// What the results area of the charity page shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CharityListing {
    /// Nothing searched yet.
    #[default]
    Idle,
    Results(Vec<Charity>),
    /// The search ran and matched nothing.
    Empty,
    /// Message to show in place of results.
    Failed(String),
    /// The backend rejected the session token.
    SessionExpired,
}

impl CharityListing {
    /// Interpret a search outcome.
    ///
    /// Validation errors keep their own message. A failed position search
    /// steers the user back to manual entry.
    pub fn from_result(
        query: &CharitySearch,
        result: Result<CharitySearchResponse, ClientError>,
    ) -> Self {
        match result {
            Ok(response) if response.charities.is_empty() => Self::Empty,
            Ok(response) => Self::Results(response.charities),
            Err(ClientError::Authentication) => Self::SessionExpired,
            Err(err) => {
                let fallback = match query {
                    CharitySearch::Location(_) => CHARITY_FETCH_FAILED,
                    CharitySearch::Near(_) => GeolocationError::Unavailable.user_message(),
                };
                if err.is_validation() {
                    Self::Failed(err.user_message(fallback))
                } else {
                    Self::Failed(fallback.to_string())
                }
            }
        }
    }

    pub fn from_geolocation_error(error: GeolocationError) -> Self {
        Self::Failed(error.user_message().to_string())
    }

    /// The message to render instead of cards, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle | Self::Results(_) => None,
            Self::Empty => Some(NO_CHARITIES_FOUND),
            Self::Failed(message) => Some(message),
            Self::SessionExpired => Some(AUTHENTICATION_FAILED),
        }
    }
}

/// Run one search and turn the outcome into a listing.
pub async fn search<A>(api: &A, query: CharitySearch) -> CharityListing
where
    A: WastageApi + ?Sized,
{
    let result = api.find_charities(&query).await;
    if let Err(err) = &result {
        log::warn!("charity search failed: {err}");
    }
    CharityListing::from_result(&query, result)
}

/// Search by the free-text location typed into the form. A blank location
/// is rejected without a request.
pub async fn search_location<A>(api: &A, location: &str) -> CharityListing
where
    A: WastageApi + ?Sized,
{
    match CharitySearch::by_location(location) {
        Ok(query) => search(api, query).await,
        Err(err) => CharityListing::Failed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::FakeBackend;
    use futures::executor::block_on;
    use shared::models::{Coordinates, ValidationError};

    fn charity(name: &str) -> Charity {
        Charity {
            name: name.to_string(),
            address: "Market Area, Street 5".to_string(),
            phone: "+91 98765 43210".to_string(),
            website: None,
            distance_km: 2.46,
            kind: "Old Age Home".to_string(),
        }
    }

    fn near() -> CharitySearch {
        CharitySearch::Near(Coordinates {
            latitude: 28.61,
            longitude: 77.21,
        })
    }

    #[test]
    fn empty_result_gets_explicit_message() {
        let backend = FakeBackend::default();
        let listing = block_on(search_location(&backend, "Delhi"));
        assert_eq!(listing, CharityListing::Empty);
        assert_eq!(listing.message(), Some(NO_CHARITIES_FOUND));
    }

    #[test]
    fn results_are_passed_through_in_order() {
        let backend = FakeBackend {
            charities: Ok(CharitySearchResponse {
                charities: vec![charity("Annapurna"), charity("Seva Sadan")],
                message: None,
            }),
            ..FakeBackend::default()
        };
        let listing = block_on(search_location(&backend, "  Delhi "));
        let CharityListing::Results(charities) = &listing else {
            panic!("expected results, got {listing:?}");
        };
        assert_eq!(charities.len(), 2);
        assert_eq!(charities[0].name, "Annapurna");
        assert_eq!(listing.message(), None);
        assert_eq!(
            backend.last_search(),
            Some(CharitySearch::Location("Delhi".to_string()))
        );
    }

    #[test]
    fn blank_location_is_rejected_without_request() {
        let backend = FakeBackend::default();
        let listing = block_on(search_location(&backend, "   "));
        assert_eq!(listing.message(), Some("Please enter a location"));
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn location_failure_uses_generic_message() {
        let backend = FakeBackend {
            charities: Err(ClientError::Server {
                status: 404,
                message: Some("Could not find coordinates".to_string()),
            }),
            ..FakeBackend::default()
        };
        let listing = block_on(search_location(&backend, "Atlantis"));
        assert_eq!(listing.message(), Some(CHARITY_FETCH_FAILED));
    }

    #[test]
    fn position_failure_suggests_manual_entry() {
        let backend = FakeBackend {
            charities: Err(ClientError::Network("offline".to_string())),
            ..FakeBackend::default()
        };
        let listing = block_on(search(&backend, near()));
        assert!(
            listing
                .message()
                .is_some_and(|message| message.contains("entering your location manually"))
        );
        assert_eq!(backend.last_search(), Some(near()));
    }

    #[test]
    fn denied_geolocation_suggests_manual_entry() {
        let listing = CharityListing::from_geolocation_error(GeolocationError::PermissionDenied);
        assert_eq!(
            listing.message(),
            Some("Location access was denied. Please enter your location manually.")
        );
    }

    #[test]
    fn rejected_token_is_reported_as_expired() {
        let backend = FakeBackend {
            charities: Err(ClientError::Authentication),
            ..FakeBackend::default()
        };
        let listing = block_on(search_location(&backend, "Delhi"));
        assert_eq!(listing, CharityListing::SessionExpired);
        assert_eq!(listing.message(), Some(AUTHENTICATION_FAILED));
    }

    #[test]
    fn validation_failure_keeps_its_own_message() {
        let query = CharitySearch::Location("Delhi".to_string());
        let listing = CharityListing::from_result(
            &query,
            Err(ClientError::Validation(ValidationError::MissingLocation)),
        );
        assert_eq!(listing.message(), Some("Please enter a location"));
    }

    #[test]
    fn idle_listing_shows_nothing() {
        assert_eq!(CharityListing::default().message(), None);
    }
}
