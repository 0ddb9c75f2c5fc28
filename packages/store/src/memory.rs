use std::sync::{Arc, Mutex};

use crate::session::Session;
use crate::session_store::SessionStore;

/// In-memory SessionStore for testing and as a fallback.
///
/// Clones share the same slot, so a clone handed to a second tracker sees what
/// the first one wrote, the way a page reload sees localStorage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn get(&self) -> Option<Session> {
        let raw = self.slot.lock().unwrap().clone()?;
        serde_json::from_str(&raw).ok()
    }

    async fn set(&self, session: &Session) {
        if let Ok(raw) = serde_json::to_string(session) {
            *self.slot.lock().unwrap() = Some(raw);
        }
    }

    async fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}
