//! Requests against the `expenses` table.

use reqwest::{Method, RequestBuilder};
use store::{ExpenseChanges, ExpenseId, NewExpense, Session};

use super::{RestBackend, EXPENSES_TABLE};

impl RestBackend {
    fn table_request(&self, method: Method, session: Option<&Session>) -> RequestBuilder {
        let token = session
            .map(|s| s.access_token.as_str())
            .unwrap_or(self.config.anon_key.as_str());
        self.http
            .request(method, self.config.table_endpoint(EXPENSES_TABLE))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
    }

    pub(crate) fn list_request(&self, session: Option<&Session>) -> RequestBuilder {
        self.table_request(Method::GET, session)
            .query(&[("select", "*")])
    }

    pub(crate) fn insert_request(
        &self,
        session: Option<&Session>,
        expense: &NewExpense,
    ) -> RequestBuilder {
        self.table_request(Method::POST, session)
            .header("Prefer", "return=representation")
            .json(&[expense])
    }

    pub(crate) fn update_request(
        &self,
        session: Option<&Session>,
        id: &ExpenseId,
        changes: &ExpenseChanges,
    ) -> RequestBuilder {
        self.table_request(Method::PATCH, session)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(changes)
    }

    pub(crate) fn delete_request(
        &self,
        session: Option<&Session>,
        id: &ExpenseId,
    ) -> RequestBuilder {
        self.table_request(Method::DELETE, session)
            .query(&[("id", format!("eq.{id}"))])
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{backend, header, json_body, session};
    use reqwest::Method;
    use store::{ExpenseChanges, ExpenseId, ExpenseType, NewExpense};

    #[test]
    fn test_list_is_unfiltered() {
        let request = backend().list_request(None).build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://demo.supabase.co/rest/v1/expenses?select=*"
        );
        // Anonymous calls authenticate with the public key
        assert_eq!(header(&request, "authorization"), Some("Bearer anon-key"));
        assert_eq!(header(&request, "apikey"), Some("anon-key"));
    }

    #[test]
    fn test_list_with_session_uses_access_token() {
        let request = backend().list_request(Some(&session())).build().unwrap();
        assert_eq!(header(&request, "authorization"), Some("Bearer user-jwt"));
        assert_eq!(header(&request, "apikey"), Some("anon-key"));
    }

    #[test]
    fn test_insert_returns_representation() {
        let new = NewExpense {
            amount: "12.50".to_string(),
            description: "Coffee".to_string(),
            r#type: ExpenseType::Out,
            user_id: "u-1".to_string(),
        };
        let request = backend()
            .insert_request(Some(&session()), &new)
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://demo.supabase.co/rest/v1/expenses"
        );
        assert_eq!(header(&request, "prefer"), Some("return=representation"));
        assert_eq!(
            json_body(&request),
            serde_json::json!([{
                "amount": "12.50",
                "description": "Coffee",
                "type": "out",
                "user_id": "u-1",
            }])
        );
    }

    #[test]
    fn test_update_targets_one_id() {
        let changes = ExpenseChanges {
            amount: "3".to_string(),
            description: "Tea".to_string(),
            r#type: ExpenseType::In,
        };
        let request = backend()
            .update_request(Some(&session()), &ExpenseId::from(42), &changes)
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(
            request.url().as_str(),
            "https://demo.supabase.co/rest/v1/expenses?id=eq.42"
        );
        assert_eq!(
            json_body(&request),
            serde_json::json!({ "amount": "3", "description": "Tea", "type": "in" })
        );
    }

    #[test]
    fn test_delete_targets_one_id() {
        let request = backend()
            .delete_request(Some(&session()), &ExpenseId::from(7))
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(
            request.url().as_str(),
            "https://demo.supabase.co/rest/v1/expenses?id=eq.7"
        );
        assert!(request.body().is_none());
        assert_eq!(header(&request, "authorization"), Some("Bearer user-jwt"));
    }

    #[test]
    fn test_text_ids_are_filtered_verbatim() {
        let id = ExpenseId::new("6f1c2a4e-8b3d-4c1e-9a57-0d2f3b4c5e6f");
        let request = backend().delete_request(None, &id).build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://demo.supabase.co/rest/v1/expenses?id=eq.6f1c2a4e-8b3d-4c1e-9a57-0d2f3b4c5e6f"
        );
    }
}
