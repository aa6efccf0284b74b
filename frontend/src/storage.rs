use outreach_common::session::{SessionError, SessionStore};
use web_sys::Storage;

/// Session storage backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<Storage, SessionError> {
        web_sys::window()
            .ok_or_else(|| SessionError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| SessionError::Storage("local storage disabled".to_string()))
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}
