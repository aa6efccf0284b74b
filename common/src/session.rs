//! Session lifecycle.
//!
//! The signed-in user lives in a [`Session`] value that is created once at
//! startup from a [`SessionStore`] and handed to whoever needs it. Only
//! [`Session::login`], [`Session::update_user`] and [`Session::logout`]
//! change it, and each of them writes through to the store.

use crate::model::user::AuthUser;
use std::cell::RefCell;
use thiserror::Error;

/// Storage key of the serialized user.
pub const SESSION_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Storage(String),

    #[error("stored session is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistent key/value storage for the session (browser local storage in
/// the console, memory in tests).
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<Vec<(String, String)>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.borrow_mut();
        entries.retain(|(k, _)| k != key);
        entries.push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().retain(|(k, _)| k != key);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<AuthUser>,
}

impl Session {
    /// Reads the stored user. A corrupt entry is removed and treated as
    /// signed out.
    pub fn restore(store: &dyn SessionStore) -> Result<Self, SessionError> {
        let Some(raw) = store.get(SESSION_KEY)? else {
            return Ok(Self::default());
        };
        match serde_json::from_str::<AuthUser>(&raw) {
            Ok(user) => Ok(Self { user: Some(user) }),
            Err(_) => {
                store.remove(SESSION_KEY)?;
                Ok(Self::default())
            }
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.token.is_empty())
    }

    /// Value of the `Authorization` header, if signed in.
    pub fn bearer(&self) -> Option<String> {
        self.user
            .as_ref()
            .filter(|u| !u.token.is_empty())
            .map(|u| format!("Bearer {}", u.token))
    }

    pub fn login(&mut self, store: &dyn SessionStore, user: AuthUser) -> Result<(), SessionError> {
        store.set(SESSION_KEY, &serde_json::to_string(&user)?)?;
        self.user = Some(user);
        Ok(())
    }

    /// Replaces the profile fields of the stored user, keeping its tokens.
    pub fn update_user(
        &mut self,
        store: &dyn SessionStore,
        profile: AuthUser,
    ) -> Result<(), SessionError> {
        let Some(current) = self.user.as_ref() else {
            return Ok(());
        };
        let merged = AuthUser {
            id: current.id.clone(),
            username: current.username.clone(),
            role: current.role.clone(),
            token: current.token.clone(),
            refresh_token: current.refresh_token.clone(),
            ..profile
        };
        self.login(store, merged)
    }

    pub fn logout(&mut self, store: &dyn SessionStore) -> Result<(), SessionError> {
        self.user = None;
        store.remove(SESSION_KEY)
    }
}
