//! Response envelopes returned by the inventory server.
//!
//! The server reports storage failures on every endpoint as `{"error": "..."}`
//! with a 200 status, so each envelope carries that field too.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when a delete fails without any explanation from the server.
pub const DEFAULT_DELETE_FAILURE: &str = "Failed to delete product";

/// Body of a collection endpoint: either the rows or the error envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ListResponse<T> {
    Rows(Vec<T>),
    Error { error: String },
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

impl<T: DeserializeOwned> ListResponse<T> {
    /// Decode a response body.
    ///
    /// Arrays are decoded row by row, so a bad row reports the field that
    /// failed; anything else must be the `{"error": ...}` envelope.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        if value.is_array() {
            return Ok(ListResponse::Rows(serde_json::from_value(value)?));
        }

        let ErrorEnvelope { error } = serde_json::from_value(value)?;
        Ok(ListResponse::Error { error })
    }
}

impl<T> ListResponse<T> {
    pub fn into_result(self) -> Result<Vec<T>, String> {
        match self {
            ListResponse::Rows(rows) => Ok(rows),
            ListResponse::Error { error } => Err(error),
        }
    }
}

/// Body of `/deleteProduct`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Absent counts as failure.
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DeleteResponse {
    pub fn succeeded() -> Self {
        Self {
            success: Some(true),
            ..Self::default()
        }
    }

    pub fn rejected(message: Option<&str>) -> Self {
        Self {
            success: Some(false),
            message: message.map(str::to_string),
            error: None,
        }
    }

    pub fn outcome(&self) -> DeleteOutcome {
        if self.success == Some(true) {
            return DeleteOutcome::Deleted;
        }

        let message = self
            .message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_DELETE_FAILURE);
        DeleteOutcome::Rejected(message.to_string())
    }
}

/// What a delete response means for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Carries the text to show the user.
    Rejected(String),
}

/// Body of `/addProduct`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProductResponse {
    #[serde(default)]
    pub success: Option<bool>,
    /// Category the server stored, possibly auto-assigned.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AddProductResponse {
    pub fn into_result(self) -> Result<Option<String>, String> {
        match (self.success, self.error) {
            (Some(true), _) => Ok(self.category),
            (_, Some(error)) => Err(error),
            _ => Err("Failed to add product".to_string()),
        }
    }
}

/// Body of `/generateReport`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ReportResponse {
    pub fn into_result(self) -> Result<String, String> {
        match (self.success, self.error) {
            (Some(true), _) => Ok(self.message.unwrap_or_default()),
            (_, Some(error)) => Err(error),
            _ => Err("Failed to generate report".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Product;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn success_true_means_deleted() {
        let response: DeleteResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        assert_eq!(response.outcome(), DeleteOutcome::Deleted);
    }

    #[test]
    fn rejection_uses_server_message() {
        let response: DeleteResponse =
            serde_json::from_value(json!({ "success": false, "message": "In use" })).unwrap();
        assert_eq!(response.outcome(), DeleteOutcome::Rejected("In use".to_string()));
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let response: DeleteResponse = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(
            response.outcome(),
            DeleteOutcome::Rejected(DEFAULT_DELETE_FAILURE.to_string())
        );
    }

    #[test]
    fn missing_success_flag_is_failure() {
        let response: DeleteResponse =
            serde_json::from_value(json!({ "error": "Missing or invalid id" })).unwrap();
        assert_eq!(
            response.outcome(),
            DeleteOutcome::Rejected("Missing or invalid id".to_string())
        );
    }

    fn decode(body: Value) -> Result<ListResponse<Product>, serde_json::Error> {
        ListResponse::from_slice(body.to_string().as_bytes())
    }

    #[test]
    fn list_response_accepts_rows_or_error() {
        assert_eq!(decode(json!([])).unwrap().into_result(), Ok(vec![]));

        let failed = decode(json!({ "error": "db down" })).unwrap();
        assert_eq!(failed.into_result(), Err("db down".to_string()));
    }

    #[test]
    fn list_response_rejects_other_shapes() {
        assert!(decode(json!({ "rows": [] })).is_err());
        assert!(decode(json!("nope")).is_err());
    }

    #[test]
    fn bad_row_reports_the_failing_field() {
        let err = decode(json!([{ "id": 1, "category": "Dairy" }])).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "got: {err}");

        let err = decode(json!([{
            "id": "seven",
            "name": "Milk",
            "category": "Dairy",
            "quantity": 1,
            "price": 1.0,
            "expiry_date": "2026-10-20"
        }]))
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"), "got: {err}");
    }

    #[test]
    fn add_product_response_returns_category() {
        let response: AddProductResponse =
            serde_json::from_value(json!({ "success": true, "category": "Dairy" })).unwrap();
        assert_eq!(response.into_result(), Ok(Some("Dairy".to_string())));

        let response: AddProductResponse =
            serde_json::from_value(json!({ "error": "Price is required." })).unwrap();
        assert_eq!(response.into_result(), Err("Price is required.".to_string()));
    }

    #[test]
    fn report_response_returns_message() {
        let response: ReportResponse = serde_json::from_value(
            json!({ "success": true, "message": "Report generated in web folder." }),
        )
        .unwrap();
        assert_eq!(
            response.into_result(),
            Ok("Report generated in web folder.".to_string())
        );
    }

    proptest! {
        #[test]
        fn non_empty_server_message_always_wins(message in "[a-zA-Z ]{1,40}") {
            let response = DeleteResponse::rejected(Some(&message));
            prop_assert_eq!(response.outcome(), DeleteOutcome::Rejected(message));
        }
    }
}
