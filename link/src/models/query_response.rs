use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::error_detail::ErrorDetail;
use crate::error::{ArborLinkError, Result};

/// Response payload for query execution.
///
/// Rows come back as raw JSON objects; use [`QueryResponse::typed_records`]
/// to decode them into a concrete row type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    /// Total number of rows matched by the query
    #[serde(default)]
    pub total_size: usize,

    /// Whether the result set is complete (the server does not paginate
    /// metadata queries, so this is normally true)
    #[serde(default = "default_done")]
    pub done: bool,

    /// Result rows as JSON objects keyed by field name
    #[serde(default)]
    pub records: Vec<JsonValue>,

    /// Error detail for failed queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

fn default_done() -> bool {
    true
}

impl QueryResponse {
    /// Decode all result rows into a typed model.
    pub fn typed_records<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let mut typed = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let row: T = serde_json::from_value(record.clone()).map_err(|e| {
                ArborLinkError::SerializationError(format!("Failed to decode query row: {}", e))
            })?;
            typed.push(row);
        }
        Ok(typed)
    }
}
