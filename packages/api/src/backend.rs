//! The remote calls the view-model depends on.

use store::{Expense, ExpenseChanges, ExpenseId, NewExpense, Session};

use crate::error::ApiError;

/// Async interface to the hosted auth service and the `expenses` table.
///
/// Table calls take the current session, if any; its access token is what the
/// service's row-level security sees. Without one the call runs anonymously.
pub trait Backend {
    fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<Session, ApiError>>;

    fn refresh_session(
        &self,
        refresh_token: &str,
    ) -> impl std::future::Future<Output = Result<Session, ApiError>>;

    fn sign_out(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// Every row of the table, unfiltered. Rows that do not decode are
    /// skipped rather than failing the whole list.
    fn list_expenses(
        &self,
        session: Option<&Session>,
    ) -> impl std::future::Future<Output = Result<Vec<Expense>, ApiError>>;

    /// Insert one row and return it as stored, with its new id.
    fn insert_expense(
        &self,
        session: Option<&Session>,
        expense: &NewExpense,
    ) -> impl std::future::Future<Output = Result<Expense, ApiError>>;

    fn update_expense(
        &self,
        session: Option<&Session>,
        id: &ExpenseId,
        changes: &ExpenseChanges,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn delete_expense(
        &self,
        session: Option<&Session>,
        id: &ExpenseId,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}
