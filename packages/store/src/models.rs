//! # Domain models for expense records
//!
//! Rows of the remote `expenses` table and the payloads sent when writing to it.
//! All types are `Serialize + Deserialize` so they travel as JSON to and from the
//! backend unchanged.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Expense`] | A stored row: server-assigned [`ExpenseId`], the `amount` as entered, a free-text `description`, the direction (`type`) and the owning `user_id`. |
//! | [`ExpenseId`] | Key of a row, kept as text whatever the column type (`bigint`, `uuid`, `text`). |
//! | [`ExpenseType`] | Direction of the money, `"in"` or `"out"` on the wire. Defaults to `Out`. |
//! | [`NewExpense`] | Insert payload. Carries the owner; the server assigns the id. |
//! | [`ExpenseChanges`] | Update payload. Only the three user-editable columns. |
//!
//! ## Amounts
//!
//! The amount is kept as the text the user typed. The column itself may be
//! numeric, in which case the backend answers with a JSON number; decoding
//! accepts either a string or a number and keeps its textual form, so `12.5`
//! and `"12.50"` both arrive as text. Ids are read the same way, and a `null`
//! type reads as `Out`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned key of an expense row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match TextOrNumber::deserialize(deserializer)? {
            TextOrNumber::Text(text) => Ok(Self(text)),
            TextOrNumber::Number(number) => Ok(Self(number.to_string())),
        }
    }
}

/// A column that may come back as a JSON string or a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Direction of an expense record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    In,
    #[default]
    Out,
}

impl ExpenseType {
    /// Wire value: `"in"` or `"out"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseType::In => "in",
            ExpenseType::Out => "out",
        }
    }

    /// Human label used by the type selector.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::In => "Money In",
            ExpenseType::Out => "Money Out",
        }
    }

    /// Parse a wire value. Anything other than `"in"` / `"out"` is rejected.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "in" => Some(ExpenseType::In),
            "out" => Some(ExpenseType::Out),
            _ => None,
        }
    }
}

/// A row of the `expenses` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Amount as entered by the user: "12.50"
    #[serde(default, deserialize_with = "amount_text")]
    pub amount: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable_type")]
    pub r#type: ExpenseType,
    /// Owner; rows written without a session carry no owner.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Insert payload for a new expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: String,
    pub description: String,
    pub r#type: ExpenseType,
    pub user_id: String,
}

/// Update payload: the columns an edit may overwrite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseChanges {
    pub amount: String,
    pub description: String,
    pub r#type: ExpenseType,
}

impl Expense {
    /// Overwrite the editable columns in place.
    pub fn apply(&mut self, changes: &ExpenseChanges) {
        self.amount = changes.amount.clone();
        self.description = changes.description.clone();
        self.r#type = changes.r#type;
    }
}

fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

fn nullable_type<'de, D>(deserializer: D) -> Result<ExpenseType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ExpenseType>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_row_with_text_amount() {
        let raw = r#"{"id":7,"amount":"12.50","description":"Coffee","type":"out","user_id":"u-1"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.id, ExpenseId::from(7));
        assert_eq!(expense.id.to_string(), "7");
        assert_eq!(expense.amount, "12.50");
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.r#type, ExpenseType::Out);
        assert_eq!(expense.user_id.as_deref(), Some("u-1"));
    }

    #[test]
    fn test_decode_row_with_numeric_amount_and_nulls() {
        let raw = r#"{"id":3,"amount":12.5,"description":null,"type":"in","user_id":null,"created_at":"2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.amount, "12.5");
        assert_eq!(expense.description, "");
        assert_eq!(expense.r#type, ExpenseType::In);
        assert!(expense.user_id.is_none());
    }

    #[test]
    fn test_decode_row_with_uuid_id() {
        let raw = r#"{"id":"6f1c2a4e-8b3d-4c1e-9a57-0d2f3b4c5e6f","amount":"4","description":"Tea","type":"out","user_id":"u-1"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.id.as_str(), "6f1c2a4e-8b3d-4c1e-9a57-0d2f3b4c5e6f");
        assert_eq!(expense.id, ExpenseId::new("6f1c2a4e-8b3d-4c1e-9a57-0d2f3b4c5e6f"));
    }

    #[test]
    fn test_decode_row_with_numeric_id() {
        let raw = r#"{"id":9007199254740993,"amount":"4","description":"Tea","type":"in"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.id.as_str(), "9007199254740993");
    }

    #[test]
    fn test_null_type_reads_as_out() {
        let raw = r#"[{"id":1,"amount":"1","description":"a","type":"in"},{"id":2,"amount":"2","description":"b","type":null}]"#;
        let expenses: Vec<Expense> = serde_json::from_str(raw).unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].r#type, ExpenseType::In);
        assert_eq!(expenses[1].r#type, ExpenseType::Out);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let raw = r#"{"id":1,"amount":"1","description":"x","type":"sideways"}"#;
        assert!(serde_json::from_str::<Expense>(raw).is_err());
        assert_eq!(ExpenseType::from_value("sideways"), None);
    }

    #[test]
    fn test_new_expense_wire_shape() {
        let new = NewExpense {
            amount: "12.50".to_string(),
            description: "Coffee".to_string(),
            r#type: ExpenseType::Out,
            user_id: "u-1".to_string(),
        };
        let value = serde_json::to_value(&new).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "amount": "12.50",
                "description": "Coffee",
                "type": "out",
                "user_id": "u-1",
            })
        );
    }

    #[test]
    fn test_apply_changes_keeps_id_and_owner() {
        let mut expense = Expense {
            id: ExpenseId::from(4),
            amount: "1".to_string(),
            description: "Old".to_string(),
            r#type: ExpenseType::Out,
            user_id: Some("u-1".to_string()),
        };
        expense.apply(&ExpenseChanges {
            amount: "2".to_string(),
            description: "New".to_string(),
            r#type: ExpenseType::In,
        });
        assert_eq!(expense.id, ExpenseId::from(4));
        assert_eq!(expense.amount, "2");
        assert_eq!(expense.description, "New");
        assert_eq!(expense.r#type, ExpenseType::In);
        assert_eq!(expense.user_id.as_deref(), Some("u-1"));
    }
}
