use serde::{Deserialize, Serialize};

/// Request payload for query execution.
///
/// # Examples
///
/// ```rust
/// use arbor_link::QueryRequest;
///
/// let request = QueryRequest {
///     query: "SELECT id, developerName, ownerEntityType FROM RecordType".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Query string in the environment's query language
    pub query: String,
}
