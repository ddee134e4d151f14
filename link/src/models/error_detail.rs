use serde::{Deserialize, Serialize};

/// Structured error returned by the server inside a query response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "INVALID_QUERY")
    #[serde(default)]
    pub error_code: String,

    /// Human-readable message
    pub message: String,
}
