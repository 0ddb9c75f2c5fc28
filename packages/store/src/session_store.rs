//! # Session persistence seam
//!
//! [`SessionStore`] is the one place the signed-in [`Session`] survives a reload.
//! It holds a single JSON document under [`crate::SESSION_STORAGE_KEY`] and
//! exposes three operations: read it, replace it, drop it.
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`crate::MemoryStore`] | tests, fallback | process memory |
//! | `FileStore` | desktop | `<dir>/expense-tracker.session.json` |
//! | `LocalStorageStore` | web (`web` feature) | `window.localStorage` |
//!
//! Implementations swallow their own failures: an unreadable or corrupt entry
//! reads as "no session", and a failed write leaves the user signed in for the
//! current run only.

use crate::session::Session;

/// Async get/set/clear over the persisted session.
pub trait SessionStore {
    fn get(&self) -> impl std::future::Future<Output = Option<Session>>;
    fn set(&self, session: &Session) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}
