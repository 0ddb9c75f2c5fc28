//! # API crate: client for the hosted database/auth service
//!
//! Everything the frontends need to talk to the backend lives here. There is no
//! server of our own: persistence, authentication and authorization belong to a
//! Supabase-compatible service (GoTrue for auth, PostgREST for tables).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Service URL and public API key, from the environment (native) or baked in at build time (web) |
//! | [`error`] | [`ApiError`], whose `Display` is the backend's own free-text message |
//! | [`backend`] | The [`Backend`] trait: the seven remote calls the view-model makes |
//! | [`rest`] | [`RestBackend`], the reqwest implementation of [`Backend`] |
//!
//! ## Remote calls
//!
//! | Call | Endpoint |
//! |------|----------|
//! | `sign_in_with_password` | `POST /auth/v1/token?grant_type=password` |
//! | `refresh_session` | `POST /auth/v1/token?grant_type=refresh_token` |
//! | `sign_out` | `POST /auth/v1/logout` |
//! | `list_expenses` | `GET /rest/v1/expenses?select=*` |
//! | `insert_expense` | `POST /rest/v1/expenses` (`Prefer: return=representation`) |
//! | `update_expense` | `PATCH /rest/v1/expenses?id=eq.{id}` |
//! | `delete_expense` | `DELETE /rest/v1/expenses?id=eq.{id}` |

pub mod backend;
pub mod config;
pub mod error;
pub mod rest;

pub use backend::Backend;
pub use config::{BackendConfig, ConfigError};
pub use error::ApiError;
pub use rest::RestBackend;

pub use store::{Expense, ExpenseChanges, ExpenseId, ExpenseType, NewExpense, Session};
