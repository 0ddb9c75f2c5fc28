//! Platform-specific tracker construction.
//!
//! The session store depends on where the app runs:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): a JSON file under `<data_dir>/expense-tracker/` via [`store::FileStore`]
//! - anything else: memory only, signed out on every start

use api::{BackendConfig, RestBackend};

use crate::tracker::Tracker;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformSessionStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformSessionStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformSessionStore = store::FileStore;

/// The tracker the app runs with.
pub type AppTracker = Tracker<RestBackend, PlatformSessionStore>;

pub fn make_tracker(config: BackendConfig) -> AppTracker {
    Tracker::new(RestBackend::new(config), make_session_store())
}

fn make_session_store() -> PlatformSessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("expense-tracker");
        store::FileStore::new(base)
    }
}
