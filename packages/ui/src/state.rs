//! # View-model state
//!
//! [`TrackerState`] is everything the page shows: the expense list, the entry
//! form, the login fields, the edit mode, the current session and the message
//! line. It is plain data. Every change goes through one of the named
//! transitions below, so the bookkeeping can be tested without a renderer or a
//! network.
//!
//! ## Edit mode
//!
//! | Mode | Entered by | Submit does | Button |
//! |------|------------|-------------|--------|
//! | [`EditMode::Creating`] | default, successful save, cancel | insert | "Add Expense" |
//! | [`EditMode::Editing`] | [`TrackerState::start_editing`] | update by id | "Save Edit" |
//!
//! ## Transitions paired with remote calls
//!
//! | Before the call | After success | After failure |
//! |-----------------|---------------|---------------|
//! | [`pending_create`](TrackerState::pending_create) | [`apply_created`](TrackerState::apply_created) | [`show_error`](TrackerState::show_error) |
//! | [`pending_update`](TrackerState::pending_update) | [`apply_updated`](TrackerState::apply_updated) | [`rollback_edit`](TrackerState::rollback_edit) |
//! | - | [`apply_deleted`](TrackerState::apply_deleted) | [`show_error`](TrackerState::show_error) |
//! | - | [`replace_expenses`](TrackerState::replace_expenses) | (ignored) |
//! | - | [`apply_login`](TrackerState::apply_login) | [`show_error`](TrackerState::show_error) |

use api::ApiError;
use store::{Expense, ExpenseChanges, ExpenseId, ExpenseType, NewExpense, Session};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully!";

/// Whether the form creates a new record or edits an existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Creating,
    Editing {
        id: ExpenseId,
    },
}

impl EditMode {
    pub fn is_editing_expense(&self, id: &ExpenseId) -> bool {
        matches!(self, EditMode::Editing { id: current } if current == id)
    }
}

/// Fields of the expense entry form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub amount: String,
    pub description: String,
    pub r#type: ExpenseType,
}

impl ExpenseForm {
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.clone(),
            description: expense.description.clone(),
            r#type: expense.r#type,
        }
    }

    /// Both text fields filled in. No other validation is done.
    pub fn is_complete(&self) -> bool {
        !self.amount.is_empty() && !self.description.is_empty()
    }

    pub fn changes(&self) -> ExpenseChanges {
        ExpenseChanges {
            amount: self.amount.clone(),
            description: self.description.clone(),
            r#type: self.r#type,
        }
    }
}

/// Fields of the login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Everything the page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackerState {
    pub expenses: Vec<Expense>,
    pub form: ExpenseForm,
    pub login: LoginForm,
    pub mode: EditMode,
    pub session: Option<Session>,
    pub message: Option<String>,
}

impl TrackerState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditMode::Creating => "Add Expense",
            EditMode::Editing { .. } => "Save Edit",
        }
    }

    /// Owner for new records: the user of a live session.
    pub fn owner_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .filter(|s| !s.is_expired())
            .map(|s| s.user_id())
            .filter(|id| !id.is_empty())
    }

    /// Copy a record into the form and remember which one is being edited.
    pub fn start_editing(&mut self, expense: &Expense) {
        self.form = ExpenseForm::from_expense(expense);
        self.mode = EditMode::Editing {
            id: expense.id.clone(),
        };
    }

    /// Leave edit mode without saving.
    pub fn cancel_editing(&mut self) {
        self.reset_form();
    }

    /// Insert payload, or `None` when the form is incomplete or nobody is
    /// signed in.
    pub fn pending_create(&self) -> Option<NewExpense> {
        if !self.form.is_complete() {
            return None;
        }
        let user_id = self.owner_id()?;
        Some(NewExpense {
            amount: self.form.amount.clone(),
            description: self.form.description.clone(),
            r#type: self.form.r#type,
            user_id: user_id.to_string(),
        })
    }

    pub fn apply_created(&mut self, expense: Expense) {
        self.expenses.insert(0, expense);
        self.reset_form();
        self.message = None;
    }

    /// Target id and new values, when editing.
    pub fn pending_update(&self) -> Option<(ExpenseId, ExpenseChanges)> {
        match &self.mode {
            EditMode::Editing { id } => Some((id.clone(), self.form.changes())),
            EditMode::Creating => None,
        }
    }

    pub fn apply_updated(&mut self, id: &ExpenseId, changes: &ExpenseChanges) {
        if let Some(expense) = self.expenses.iter_mut().find(|e| &e.id == id) {
            expense.apply(changes);
        }
        self.reset_form();
        self.message = None;
    }

    /// A save failed: restore the form to the stored values and stay in edit
    /// mode.
    pub fn rollback_edit(&mut self, id: &ExpenseId, error: &ApiError) {
        if let Some(expense) = self.expenses.iter().find(|e| &e.id == id) {
            self.form = ExpenseForm::from_expense(expense);
        }
        self.show_error(error);
    }

    /// Remove the first record with `id`. Editing that record ends edit mode.
    pub fn apply_deleted(&mut self, id: &ExpenseId) {
        if let Some(index) = self.expenses.iter().position(|e| &e.id == id) {
            self.expenses.remove(index);
        }
        if self.mode.is_editing_expense(id) {
            self.reset_form();
        }
    }

    pub fn replace_expenses(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
    }

    pub fn apply_login(&mut self, session: Session) {
        self.session = Some(session);
        self.login.password.clear();
        self.message = Some(LOGIN_SUCCESS_MESSAGE.to_string());
    }

    /// The session is gone locally whatever the remote said; a remote failure
    /// is still reported.
    pub fn apply_logout(&mut self, error: Option<&ApiError>) {
        self.session = None;
        self.message = error.map(|e| e.to_string());
    }

    pub fn show_error(&mut self, error: &ApiError) {
        self.message = Some(error.to_string());
    }

    fn reset_form(&mut self) {
        self.form = ExpenseForm::default();
        self.mode = EditMode::Creating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::AuthUser;

    fn expense(id: i64, amount: &str, description: &str) -> Expense {
        Expense {
            id: ExpenseId::from(id),
            amount: amount.to_string(),
            description: description.to_string(),
            r#type: ExpenseType::Out,
            user_id: Some("u-1".to_string()),
        }
    }

    fn session(expires_at: Option<i64>) -> Session {
        Session {
            access_token: "jwt".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            expires_at,
            refresh_token: None,
            user: AuthUser {
                id: "u-1".to_string(),
                email: Some("a@b.com".to_string()),
            },
        }
    }

    fn backend_error(message: &str) -> ApiError {
        ApiError::Backend {
            status: 400,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_start_editing_populates_form() {
        let mut state = TrackerState::default();
        assert_eq!(state.submit_label(), "Add Expense");

        let mut target = expense(5, "9.99", "Lunch");
        target.r#type = ExpenseType::In;
        state.start_editing(&target);

        assert_eq!(state.mode, EditMode::Editing { id: ExpenseId::from(5) });
        assert_eq!(state.form.amount, "9.99");
        assert_eq!(state.form.description, "Lunch");
        assert_eq!(state.form.r#type, ExpenseType::In);
        assert_eq!(state.submit_label(), "Save Edit");

        state.cancel_editing();
        assert_eq!(state.mode, EditMode::Creating);
        assert_eq!(state.form, ExpenseForm::default());
    }

    #[test]
    fn test_pending_create_requires_fields_and_owner() {
        let mut state = TrackerState::default();
        state.form.amount = "12.50".to_string();
        state.form.description = "Coffee".to_string();

        // No session
        assert!(state.pending_create().is_none());

        // Expired session
        state.session = Some(session(Some(1)));
        assert!(state.pending_create().is_none());

        state.session = Some(session(None));
        let new = state.pending_create().unwrap();
        assert_eq!(new.user_id, "u-1");
        assert_eq!(new.amount, "12.50");
        assert_eq!(new.r#type, ExpenseType::Out);

        state.form.description.clear();
        assert!(state.pending_create().is_none());
    }

    #[test]
    fn test_apply_created_prepends_and_resets() {
        let mut state = TrackerState {
            expenses: vec![expense(1, "1", "Old")],
            message: Some("stale".to_string()),
            ..Default::default()
        };
        state.form.amount = "2".to_string();
        state.form.description = "New".to_string();
        state.form.r#type = ExpenseType::In;

        state.apply_created(expense(2, "2", "New"));

        assert_eq!(state.expenses.len(), 2);
        assert_eq!(state.expenses[0].id, ExpenseId::from(2));
        assert_eq!(state.form, ExpenseForm::default());
        assert_eq!(state.form.r#type, ExpenseType::Out);
        assert!(state.message.is_none());
    }

    #[test]
    fn test_pending_update_only_while_editing() {
        let mut state = TrackerState::default();
        assert!(state.pending_update().is_none());

        state.start_editing(&expense(3, "1", "Bus"));
        state.form.amount = "2".to_string();
        let (id, changes) = state.pending_update().unwrap();
        assert_eq!(id, ExpenseId::from(3));
        assert_eq!(changes.amount, "2");
        assert_eq!(changes.description, "Bus");
    }

    #[test]
    fn test_rollback_edit_restores_stored_values() {
        let mut state = TrackerState {
            expenses: vec![expense(3, "1", "Bus")],
            ..Default::default()
        };
        state.start_editing(&state.expenses[0].clone());
        state.form.amount = "999".to_string();

        state.rollback_edit(&ExpenseId::from(3), &backend_error("permission denied"));

        assert_eq!(state.mode, EditMode::Editing { id: ExpenseId::from(3) });
        assert_eq!(state.form.amount, "1");
        assert_eq!(state.expenses[0].amount, "1");
        assert_eq!(state.message.as_deref(), Some("permission denied"));
    }

    #[test]
    fn test_apply_deleted_removes_at_most_one() {
        let mut state = TrackerState {
            expenses: vec![expense(1, "1", "A"), expense(2, "2", "B"), expense(2, "2", "B")],
            ..Default::default()
        };

        state.apply_deleted(&ExpenseId::from(2));
        assert_eq!(state.expenses.len(), 2);

        state.apply_deleted(&ExpenseId::from(99));
        assert_eq!(state.expenses.len(), 2);
    }

    #[test]
    fn test_deleting_edited_record_ends_edit_mode() {
        let mut state = TrackerState {
            expenses: vec![expense(1, "1", "A"), expense(2, "2", "B")],
            ..Default::default()
        };
        state.start_editing(&state.expenses[1].clone());

        state.apply_deleted(&ExpenseId::from(1));
        assert_eq!(state.mode, EditMode::Editing { id: ExpenseId::from(2) });

        state.apply_deleted(&ExpenseId::from(2));
        assert_eq!(state.mode, EditMode::Creating);
        assert_eq!(state.form, ExpenseForm::default());
    }

    #[test]
    fn test_login_and_logout_messages() {
        let mut state = TrackerState::default();
        state.login.email = "a@b.com".to_string();
        state.login.password = "pw".to_string();

        state.apply_login(session(None));
        assert_eq!(state.owner_id(), Some("u-1"));
        assert_eq!(state.message.as_deref(), Some(LOGIN_SUCCESS_MESSAGE));
        assert_eq!(state.login.email, "a@b.com");
        assert!(state.login.password.is_empty());

        state.apply_logout(Some(&backend_error("Session not found")));
        assert!(state.session.is_none());
        assert_eq!(state.message.as_deref(), Some("Session not found"));

        state.apply_logout(None);
        assert!(state.message.is_none());
    }
}
