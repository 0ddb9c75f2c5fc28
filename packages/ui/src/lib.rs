//! This crate contains the expense tracker's view-model and all shared UI for
//! the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod state;
pub use state::{EditMode, ExpenseForm, LoginForm, TrackerState};

pub mod tracker;
pub use tracker::{StateHandle, Tracker};

mod platform;
pub use platform::{make_tracker, AppTracker, PlatformSessionStore};

mod provider;
pub use provider::{use_tracker, use_tracker_state, TrackerProvider};

pub mod views;

mod login_panel;
pub use login_panel::LoginPanel;

mod expense_form;
pub use expense_form::ExpenseEntry;

mod expense_list;
pub use expense_list::ExpenseList;
