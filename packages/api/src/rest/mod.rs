//! # HTTP implementation of [`Backend`]
//!
//! [`RestBackend`] speaks the two JSON-over-HTTPS dialects of a Supabase-style
//! service with a single [`reqwest::Client`]. It works unchanged on native
//! targets and in the browser (reqwest uses `fetch` on `wasm32`).
//!
//! Every request carries the public key in the `apikey` header. Table requests
//! also carry `Authorization: Bearer <token>`, where the token is the session's
//! access token or, for anonymous calls, the public key itself.
//!
//! Request construction ([`auth`], [`expenses`]) is kept apart from sending so
//! the exact wire shape can be checked without a network.

use reqwest::{Client, RequestBuilder};
use store::{current_timestamp, Expense, ExpenseChanges, ExpenseId, NewExpense, Session};

use crate::backend::Backend;
use crate::config::BackendConfig;
use crate::error::ApiError;

mod auth;
mod expenses;

/// Name of the remote table holding expense rows.
pub const EXPENSES_TABLE: &str = "expenses";

/// reqwest-backed client for the hosted service.
#[derive(Clone, Debug)]
pub struct RestBackend {
    config: BackendConfig,
    http: Client,
}

impl RestBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

/// Send a request and return the body of a success response.
async fn send(request: RequestBuilder) -> Result<String, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::from_response(status.as_u16(), &body));
    }
    Ok(body)
}

/// Decode a list of rows one by one, skipping the ones that do not fit
/// [`Expense`]. The body itself must still be a JSON array.
fn parse_rows(body: &str) -> Result<Vec<Expense>, ApiError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let total = values.len();
    let rows: Vec<Expense> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::warn!("Skipping undecodable expense row: {}", e);
                None
            }
        })
        .collect();
    if rows.len() < total {
        tracing::warn!("Decoded {} of {} expense rows", rows.len(), total);
    }
    Ok(rows)
}

fn parse_session(body: &str) -> Result<Session, ApiError> {
    let session: Session = serde_json::from_str(body)?;
    Ok(session.with_expiry_from(current_timestamp()))
}

impl Backend for RestBackend {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        tracing::debug!("Signing in with password");
        let body = send(self.password_grant(email, password)).await?;
        parse_session(&body)
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, ApiError> {
        tracing::debug!("Refreshing session");
        let body = send(self.refresh_grant(refresh_token)).await?;
        parse_session(&body)
    }

    async fn sign_out(&self, session: &Session) -> Result<(), ApiError> {
        tracing::debug!("Signing out {}", session.user_id());
        send(self.logout_request(session)).await?;
        Ok(())
    }

    async fn list_expenses(&self, session: Option<&Session>) -> Result<Vec<Expense>, ApiError> {
        let body = send(self.list_request(session)).await?;
        let rows = parse_rows(&body)?;
        tracing::debug!("Fetched {} expenses", rows.len());
        Ok(rows)
    }

    async fn insert_expense(
        &self,
        session: Option<&Session>,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        let body = send(self.insert_request(session, expense)).await?;
        let created = parse_rows(&body)?
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyInsert)?;
        tracing::debug!("Inserted expense {}", created.id);
        Ok(created)
    }

    async fn update_expense(
        &self,
        session: Option<&Session>,
        id: &ExpenseId,
        changes: &ExpenseChanges,
    ) -> Result<(), ApiError> {
        send(self.update_request(session, id, changes)).await?;
        tracing::debug!("Updated expense {}", id);
        Ok(())
    }

    async fn delete_expense(
        &self,
        session: Option<&Session>,
        id: &ExpenseId,
    ) -> Result<(), ApiError> {
        send(self.delete_request(session, id)).await?;
        tracing::debug!("Deleted expense {}", id);
        Ok(())
    }
}
