//! # localStorage session store, browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the **web platform**.
//! The session is kept as a JSON string in `window.localStorage` under
//! [`SESSION_STORAGE_KEY`], so it survives page reloads.
//!
//! All methods swallow errors. Private browsing modes may refuse storage
//! entirely; the user then stays signed in for the current page only.

use web_sys::Storage;

use crate::session::{Session, SESSION_STORAGE_KEY};
use crate::session_store::SessionStore;

/// localStorage-backed SessionStore for web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self {
            key: SESSION_STORAGE_KEY.to_string(),
        }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for LocalStorageStore {
    async fn get(&self) -> Option<Session> {
        let raw = Self::storage()?.get_item(&self.key).ok()??;
        serde_json::from_str(&raw).ok()
    }

    async fn set(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(session) {
            let _ = storage.set_item(&self.key, &raw);
        }
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
