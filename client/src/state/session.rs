//! Durable session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes the user identifier; the dashboard flows read it back and
//! bounce to the login page when it is missing. Storage sits behind
//! [`KeyValueStore`] so flows run against `localStorage` in the browser and
//! against [`MemoryStorage`] in tests and during SSR.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::types::UserId;

/// Storage key holding the logged-in user's identifier.
pub const USER_ID_KEY: &str = "userId";

/// Values an older page could have written in place of a real identifier.
const ABSENT_MARKERS: [&str; 3] = ["", "null", "undefined"];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("not logged in")]
    NotLoggedIn,
    #[error("stored user id {0:?} is not numeric")]
    InvalidUserId(String),
    #[error("session storage failed: {0}")]
    Storage(String),
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn remove(&self, key: &str);
}

/// `window.localStorage`. Reads are empty and writes fail outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()
                .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|_| SessionError::Storage("localStorage rejected the write".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(SessionError::Storage("localStorage unavailable".to_owned()))
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Typed view over the stored user identifier.
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    store: S,
}

impl Session<BrowserStorage> {
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The logged-in user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotLoggedIn`] when nothing usable is stored.
    pub fn user_id(&self) -> Result<UserId, SessionError> {
        match self.store.get(USER_ID_KEY) {
            Some(raw) => {
                let trimmed = raw.trim();
                if ABSENT_MARKERS.contains(&trimmed) {
                    Err(SessionError::NotLoggedIn)
                } else {
                    Ok(UserId::new(trimmed))
                }
            }
            None => Err(SessionError::NotLoggedIn),
        }
    }

    /// The logged-in user's numeric id, as task payloads need it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotLoggedIn`] when nothing is stored and
    /// [`SessionError::InvalidUserId`] when the stored value is not an integer.
    pub fn numeric_user_id(&self) -> Result<i64, SessionError> {
        let id = self.user_id()?;
        id.as_number().ok_or_else(|| SessionError::InvalidUserId(id.to_string()))
    }

    /// Persist `id` as the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the write is rejected.
    pub fn remember(&self, id: &UserId) -> Result<(), SessionError> {
        self.store.set(USER_ID_KEY, id.as_str())
    }

    pub fn forget(&self) {
        self.store.remove(USER_ID_KEY);
    }
}
