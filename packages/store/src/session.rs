//! Authenticated session issued by the auth service.

use serde::{Deserialize, Serialize};

/// Fixed key the session is persisted under.
pub const SESSION_STORAGE_KEY: &str = "expense-tracker.session";

/// Seconds before the real expiry at which a session already counts as stale.
const EXPIRY_MARGIN_SECS: i64 = 10;

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Tokens and identity held after a successful sign-in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds as reported at issue time.
    #[serde(default)]
    pub expires_in: i64,
    /// Absolute expiry (unix seconds).
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// Fill in `expires_at` from `expires_in` when the service left it out.
    pub fn with_expiry_from(mut self, now: i64) -> Self {
        if self.expires_at.is_none() && self.expires_in > 0 {
            self.expires_at = Some(now + self.expires_in);
        }
        self
    }

    /// A session without a known expiry never counts as expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        matches!(self.expires_at, Some(at) if at - EXPIRY_MARGIN_SECS <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp())
    }
}

/// Current unix time in seconds.
pub fn current_timestamp() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}
