//! # Tracker: remote calls paired with view-model transitions
//!
//! [`Tracker`] owns the two injected services, a [`Backend`] and a
//! [`SessionStore`], and runs each user action as one request/response cycle:
//!
//! 1. read what the call needs from the state,
//! 2. release the state and await the remote call,
//! 3. apply the outcome with one transition.
//!
//! State is reached through [`StateHandle`] so the same code drives a plain
//! [`TrackerState`] in tests and a Dioxus signal in the UI. Nothing is held
//! across an await, and overlapping actions apply their outcomes in the order
//! their responses arrive.
//!
//! | Action | Remote call | Local effect |
//! |--------|-------------|--------------|
//! | [`start`](Tracker::start) | refresh (if expired) + list | session restored, list loaded |
//! | [`login`](Tracker::login) | password sign-in | session held and persisted, list re-fetched |
//! | [`logout`](Tracker::logout) | sign-out | session dropped and storage cleared, list re-fetched |
//! | [`refresh`](Tracker::refresh) | list | list replaced; failures only logged |
//! | [`submit`](Tracker::submit) | insert or update | per edit mode |
//! | [`delete_expense`](Tracker::delete_expense) | delete | record removed on success only |

use api::Backend;
use store::{ExpenseId, Session, SessionStore};

use crate::state::{EditMode, TrackerState};

/// Scoped access to the view-model.
pub trait StateHandle {
    fn with<R>(&self, f: impl FnOnce(&TrackerState) -> R) -> R;
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut TrackerState) -> R) -> R;
}

impl StateHandle for TrackerState {
    fn with<R>(&self, f: impl FnOnce(&TrackerState) -> R) -> R {
        f(self)
    }

    fn with_mut<R>(&mut self, f: impl FnOnce(&mut TrackerState) -> R) -> R {
        f(self)
    }
}

/// The view-model's services.
pub struct Tracker<B, S> {
    backend: B,
    sessions: S,
}

impl<B: Backend, S: SessionStore> Tracker<B, S> {
    pub fn new(backend: B, sessions: S) -> Self {
        Self { backend, sessions }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Startup: restore the persisted session, then load the list.
    pub async fn start(&self, state: &mut impl StateHandle) {
        self.restore_session(state).await;
        self.refresh(state).await;
    }

    /// Put the persisted session (refreshed if it went stale) into the state.
    /// A session that arrived while the stored one was loading, from a login,
    /// is kept.
    pub async fn restore_session(&self, state: &mut impl StateHandle) -> Option<Session> {
        let restored = self.load_session().await;
        state.with_mut(|s| {
            if s.session.is_none() {
                s.session = restored;
            }
            s.session.clone()
        })
    }

    async fn load_session(&self) -> Option<Session> {
        let stored = self.sessions.get().await?;
        if !stored.is_expired() {
            return Some(stored);
        }

        let Some(refresh_token) = stored.refresh_token.as_deref() else {
            self.sessions.clear().await;
            return None;
        };
        match self.backend.refresh_session(refresh_token).await {
            Ok(session) => {
                self.sessions.set(&session).await;
                Some(session)
            }
            Err(e) => {
                tracing::warn!("Dropping stale session: {}", e);
                self.sessions.clear().await;
                None
            }
        }
    }

    pub async fn login(&self, state: &mut impl StateHandle) {
        let (email, password) =
            state.with(|s| (s.login.email.clone(), s.login.password.clone()));

        match self.backend.sign_in_with_password(&email, &password).await {
            Ok(session) => {
                self.sessions.set(&session).await;
                state.with_mut(|s| s.apply_login(session));
                self.refresh(state).await;
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                state.with_mut(|s| s.show_error(&e));
            }
        }
    }

    pub async fn logout(&self, state: &mut impl StateHandle) {
        let session = state.with(|s| s.session.clone());

        let outcome = match &session {
            Some(session) if !session.is_expired() => self.backend.sign_out(session).await,
            _ => Ok(()),
        };
        if let Err(e) = &outcome {
            tracing::warn!("Remote sign-out failed: {}", e);
        }

        self.sessions.clear().await;
        state.with_mut(|s| s.apply_logout(outcome.as_ref().err()));
        self.refresh(state).await;
    }

    /// Replace the list with every remote row. Failures keep the old list.
    pub async fn refresh(&self, state: &mut impl StateHandle) {
        let session = state.with(|s| s.session.clone());
        match self.backend.list_expenses(session.as_ref()).await {
            Ok(rows) => state.with_mut(|s| s.replace_expenses(rows)),
            Err(e) => tracing::warn!("Failed to fetch expenses: {}", e),
        }
    }

    /// The form's submit button: insert while creating, update while editing.
    pub async fn submit(&self, state: &mut impl StateHandle) {
        match state.with(|s| s.mode.clone()) {
            EditMode::Creating => self.add_expense(state).await,
            EditMode::Editing { .. } => self.save_edit(state).await,
        }
    }

    /// Insert the form as a new record. Incomplete form or no session: no-op.
    pub async fn add_expense(&self, state: &mut impl StateHandle) {
        let Some((expense, session)) =
            state.with(|s| s.pending_create().map(|e| (e, s.session.clone())))
        else {
            return;
        };

        match self.backend.insert_expense(session.as_ref(), &expense).await {
            Ok(created) => state.with_mut(|s| s.apply_created(created)),
            Err(e) => {
                tracing::warn!("Failed to add expense: {}", e);
                state.with_mut(|s| s.show_error(&e));
            }
        }
    }

    /// Write the form over the record being edited.
    pub async fn save_edit(&self, state: &mut impl StateHandle) {
        let Some((id, changes, session)) = state.with(|s| {
            s.pending_update()
                .map(|(id, changes)| (id, changes, s.session.clone()))
        }) else {
            return;
        };

        match self
            .backend
            .update_expense(session.as_ref(), &id, &changes)
            .await
        {
            Ok(()) => state.with_mut(|s| s.apply_updated(&id, &changes)),
            Err(e) => {
                tracing::warn!("Failed to save expense {}: {}", id, e);
                state.with_mut(|s| s.rollback_edit(&id, &e));
            }
        }
    }

    pub async fn delete_expense(&self, state: &mut impl StateHandle, id: &ExpenseId) {
        let session = state.with(|s| s.session.clone());
        match self.backend.delete_expense(session.as_ref(), id).await {
            Ok(()) => state.with_mut(|s| s.apply_deleted(id)),
            Err(e) => {
                tracing::warn!("Failed to delete expense {}: {}", id, e);
                state.with_mut(|s| s.show_error(&e));
            }
        }
    }
}
