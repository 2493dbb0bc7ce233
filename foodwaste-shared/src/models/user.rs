use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::response::Validate;

/// Identity record returned by the backend. Read-only on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Backend identifier for the account.
    pub id: String,

    /// The user's email address.
    pub email: String,

    /// Display name, when the user gave one.
    #[serde(default)]
    pub name: Option<String>,

    /// Mobile number, when the user gave one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

impl User {
    /// Name to show in the navigation bar: the name when set, else the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

impl Validate for User {
    fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// Credentials for `POST /auth/login`.
///
/// Exactly one of `email` or `mobile` is set, chosen from the identifier the
/// user typed.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub password: String,
}

impl LoginRequest {
    /// Builds a login request from a free-form identifier.
    ///
    /// Identifiers containing `@` are sent as an email, anything else as a
    /// mobile number.
    ///
    /// # Errors
    /// [`ValidationError::MissingFields`] when the identifier or password is
    /// blank.
    pub fn new(identifier: &str, password: &str) -> Result<Self, ValidationError> {
        let identifier = identifier.trim();
        if identifier.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let (email, mobile) = if identifier.contains('@') {
            (Some(identifier.to_string()), None)
        } else {
            (None, Some(identifier.to_string()))
        };

        Ok(Self {
            email,
            mobile,
            password: password.to_string(),
        })
    }
}

// Keeps the password out of logs and panic messages.
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("mobile", &self.mobile)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account details for `POST /auth/register`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub password: String,
}

impl RegisterRequest {
    /// Builds a registration request, dropping blank optional fields.
    ///
    /// # Errors
    /// - [`ValidationError::MissingFields`] when email or password is blank.
    /// - [`ValidationError::InvalidEmail`] when the email has no `@`.
    pub fn new(
        name: &str,
        email: &str,
        mobile: &str,
        password: &str,
    ) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            name: non_blank(name),
            email: email.to_string(),
            mobile: non_blank(mobile),
            password: password.to_string(),
        })
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("mobile", &self.mobile)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Successful login or registration.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated account.
    pub user: User,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

impl Validate for AuthResponse {
    fn is_valid(&self) -> bool {
        !self.token.trim().is_empty() && self.user.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::decode_response;

    fn user(name: Option<&str>) -> User {
        User {
            id: "6650f0c2a1".to_string(),
            email: "cook@example.com".to_string(),
            name: name.map(ToString::to_string),
            mobile: None,
        }
    }

    #[test]
    fn display_name_prefers_name() {
        assert_eq!(user(Some("Asha")).display_name(), "Asha");
        assert_eq!(user(Some("  ")).display_name(), "cook@example.com");
        assert_eq!(user(None).display_name(), "cook@example.com");
    }

    #[test]
    fn me_response_with_null_name_deserializes() {
        let json = r#"{"id":"abc","email":"a@b.c","mobile":"9876543210","name":null}"#;
        let parsed: User = decode_response(200, json).unwrap();
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.mobile.as_deref(), Some("9876543210"));
    }

    #[test]
    fn login_identifier_with_at_is_an_email() {
        let request = LoginRequest::new(" cook@example.com ", "secret").unwrap();
        assert_eq!(request.email.as_deref(), Some("cook@example.com"));
        assert_eq!(request.mobile, None);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "cook@example.com", "password": "secret"})
        );
    }

    #[test]
    fn login_identifier_without_at_is_a_mobile() {
        let request = LoginRequest::new("9876543210", "secret").unwrap();
        assert_eq!(request.email, None);
        assert_eq!(request.mobile.as_deref(), Some("9876543210"));
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            LoginRequest::new("   ", "secret"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            LoginRequest::new("cook@example.com", ""),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn register_drops_blank_optionals() {
        let request = RegisterRequest::new("", "cook@example.com", "  ", "secret").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "cook@example.com", "password": "secret"})
        );
    }

    #[test]
    fn register_validates_email() {
        assert_eq!(
            RegisterRequest::new("Asha", "not-an-email", "", "secret"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            RegisterRequest::new("Asha", "", "", "secret"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn debug_output_hides_secrets() {
        let request = LoginRequest::new("cook@example.com", "hunter2").unwrap();
        assert!(!format!("{request:?}").contains("hunter2"));

        let response = AuthResponse {
            token: "jwt-value".to_string(),
            user: user(None),
        };
        assert!(!format!("{response:?}").contains("jwt-value"));
    }

    #[test]
    fn auth_response_requires_token() {
        let json = r#"{"token":"","user":{"id":"1","email":"a@b.c"}}"#;
        assert!(decode_response::<AuthResponse>(200, json).is_err());
    }
}
