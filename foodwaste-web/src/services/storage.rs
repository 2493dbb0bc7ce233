//! Persistence of the session across page loads.

use crate::config::FrontendConfig;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use gloo_utils::errors::JsError;
use shared::models::User;
use wasm_bindgen::JsValue;

/// Where the bearer token and cached user record survive reloads.
pub trait SessionStorage {
    /// The persisted token, if any.
    fn token(&self) -> Option<String>;

    /// Persist a token and the user it belongs to.
    ///
    /// # Errors
    /// Returns the storage error when the browser refuses the write.
    fn save(&self, token: &str, user: &User) -> Result<(), StorageError>;

    /// Remove both the token and the user record.
    fn clear(&self);
}

/// `localStorage`, shared by every tab on the origin. Last writer wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserStorage {
    token_key: String,
    user_key: String,
}

impl BrowserStorage {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            token_key: config.token_key.clone(),
            user_key: config.user_key.clone(),
        }
    }
}

/// The token is kept as the bare string, not JSON, so tokens written by
/// other clients of the same backend read back unchanged.
impl SessionStorage for BrowserStorage {
    fn token(&self) -> Option<String> {
        stored_token(LocalStorage::raw().get_item(&self.token_key).ok().flatten())
    }

    fn save(&self, token: &str, user: &User) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(&self.token_key, token)
            .map_err(|err| storage_error(&self.token_key, err))?;
        LocalStorage::set(&self.user_key, user)
    }

    fn clear(&self) {
        LocalStorage::delete(&self.token_key);
        LocalStorage::delete(&self.user_key);
    }
}

fn stored_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

fn storage_error(key: &str, value: JsValue) -> StorageError {
    JsError::try_from(value).map_or_else(
        |_| StorageError::KeyNotFound(key.to_string()),
        StorageError::JsError,
    )
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::{SessionStorage, StorageError, User};
    use std::cell::{Cell, RefCell};

    /// In-memory stand-in for `localStorage`.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryStorage {
        token: RefCell<Option<String>>,
        user: RefCell<Option<User>>,
        reject_writes: Cell<bool>,
    }

    impl MemoryStorage {
        pub(crate) fn with_token(token: &str) -> Self {
            let storage = Self::default();
            storage.token.replace(Some(token.to_string()));
            storage
        }

        pub(crate) fn rejecting_writes() -> Self {
            let storage = Self::default();
            storage.reject_writes.set(true);
            storage
        }

        pub(crate) fn user(&self) -> Option<User> {
            self.user.borrow().clone()
        }
    }

    impl SessionStorage for MemoryStorage {
        fn token(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn save(&self, token: &str, user: &User) -> Result<(), StorageError> {
            if self.reject_writes.get() {
                return Err(StorageError::KeyNotFound("quota exceeded".to_string()));
            }
            self.token.replace(Some(token.to_string()));
            self.user.replace(Some(user.clone()));
            Ok(())
        }

        fn clear(&self) {
            self.token.replace(None);
            self.user.replace(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stored_token;

    #[test]
    fn token_is_read_as_stored() {
        assert_eq!(
            stored_token(Some("eyJhbGciOiJIUzI1NiJ9.abc".to_string())),
            Some("eyJhbGciOiJIUzI1NiJ9.abc".to_string())
        );
    }

    #[test]
    fn blank_token_counts_as_absent() {
        assert_eq!(stored_token(Some("  ".to_string())), None);
        assert_eq!(stored_token(None), None);
    }
}
