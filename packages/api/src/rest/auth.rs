//! Auth requests: password sign-in, refresh and sign-out.

use reqwest::RequestBuilder;
use serde_json::json;
use store::Session;

use super::RestBackend;

impl RestBackend {
    fn token_request(&self, grant_type: &str) -> RequestBuilder {
        self.http
            .post(self.config.auth_endpoint("token"))
            .query(&[("grant_type", grant_type)])
            .header("apikey", &self.config.anon_key)
    }

    pub(crate) fn password_grant(&self, email: &str, password: &str) -> RequestBuilder {
        self.token_request("password")
            .json(&json!({ "email": email, "password": password }))
    }

    pub(crate) fn refresh_grant(&self, refresh_token: &str) -> RequestBuilder {
        self.token_request("refresh_token")
            .json(&json!({ "refresh_token": refresh_token }))
    }

    pub(crate) fn logout_request(&self, session: &Session) -> RequestBuilder {
        self.http
            .post(self.config.auth_endpoint("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&session.access_token)
    }
}
