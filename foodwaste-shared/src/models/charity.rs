use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::ValidationError;
use super::response::Validate;

/// A charity, NGO, or old age home near the searched location.
///
/// Every text field originates from third-party map data and must be treated
/// as untrusted when rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Charity {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Charity {
    /// The website as a link target, only when it is an absolute `http` or
    /// `https` URL.
    #[must_use]
    pub fn website_url(&self) -> Option<Url> {
        let raw = self.website.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        Url::parse(raw)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }

    /// A `tel:` link built from the phone's digits and an optional leading
    /// `+`, or `None` when there are no digits.
    #[must_use]
    pub fn tel_href(&self) -> Option<String> {
        let phone = self.phone.trim();
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let prefix = if phone.starts_with('+') { "+" } else { "" };
        Some(format!("tel:{prefix}{digits}"))
    }

    /// Distance rounded to one decimal, e.g. `2.5 km away`.
    #[must_use]
    pub fn distance_label(&self) -> String {
        format!("{:.1} km away", self.distance_km)
    }
}

impl Validate for Charity {
    fn is_valid(&self) -> bool {
        self.distance_km.is_finite() && self.distance_km >= 0.0
    }
}

/// Response of both `find-charities` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CharitySearchResponse {
    pub charities: Vec<Charity>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Validate for CharitySearchResponse {
    fn is_valid(&self) -> bool {
        self.charities.iter().all(Validate::is_valid)
    }
}

/// A device position, sent as the body of `POST /predict/find-charities`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The two ways to search for charities.
#[derive(Debug, Clone, PartialEq)]
pub enum CharitySearch {
    /// Free-text place name, geocoded by the backend.
    Location(String),
    /// Position reported by the device.
    Near(Coordinates),
}

impl CharitySearch {
    /// Builds a free-text search.
    ///
    /// # Errors
    /// [`ValidationError::MissingLocation`] when the input is blank.
    pub fn by_location(input: &str) -> Result<Self, ValidationError> {
        let location = input.trim();
        if location.is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        Ok(Self::Location(location.to_string()))
    }
}
