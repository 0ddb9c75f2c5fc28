//! Backend configuration from environment variables.

use thiserror::Error;

/// Environment variable holding the service URL.
pub const URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the public (anon) API key.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Missing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
}

/// Where the backend lives and the public key every request carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into().trim().trim_end_matches('/').to_string();
        Self {
            url,
            anon_key: anon_key.into().trim().to_string(),
        }
    }

    /// Build from optional raw values; absent or blank values are errors.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(URL_VAR))?;
        let anon_key = anon_key
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ANON_KEY_VAR))?;
        Ok(Self::new(url, anon_key))
    }

    /// Read `SUPABASE_URL` / `SUPABASE_ANON_KEY` from the process environment,
    /// loading a `.env` file first if one exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let url = std::env::var(URL_VAR).ok();
        let anon_key = std::env::var(ANON_KEY_VAR).ok();
        Self::from_values(url.as_deref(), anon_key.as_deref())
    }

    /// Values captured from the environment when the crate was compiled.
    /// Used by the web build, which has no process environment at runtime.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// `{url}/auth/v1/{path}`
    pub fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    /// `{url}/rest/v1/{table}`
    pub fn table_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}
