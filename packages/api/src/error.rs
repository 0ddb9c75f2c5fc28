//! Errors returned by backend calls.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single remote call.
///
/// The UI shows `to_string()` verbatim, so [`ApiError::Backend`] displays only
/// the message the service sent back.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// A success response had an unexpected body.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An insert succeeded but returned no row.
    #[error("Insert returned no rows")]
    EmptyInsert,
}

/// Error bodies of both services. GoTrue uses `msg` or
/// `error`/`error_description`; PostgREST uses `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Build a [`ApiError::Backend`] from a failed response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .msg
            .or(parsed.message)
            .or(parsed.error_description)
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("Request failed with status {status}")
                } else {
                    body.trim().to_string()
                }
            });
        ApiError::Backend { status, message }
    }
}
