//! Error types for arbor-link
//!
//! Transport and protocol failures surfaced by the client library.

use std::fmt;

/// Result type for link operations
pub type Result<T> = std::result::Result<T, ArborLinkError>;

/// Errors that can occur while talking to an Arbor environment
#[derive(Debug)]
pub enum ArborLinkError {
    /// Connection-level failure (DNS, TCP, TLS)
    NetworkError(String),

    /// Authentication was rejected by the server
    AuthenticationError(String),

    /// Client was misconfigured (missing base URL, bad timeout, ...)
    ConfigurationError(String),

    /// The environment rejected the query itself
    QueryError(String),

    /// Response body could not be decoded
    SerializationError(String),

    /// Request or connect timeout elapsed
    TimeoutError(String),

    /// Non-success HTTP status from the server
    ServerError { status_code: u16, message: String },
}

impl fmt::Display for ArborLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArborLinkError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ArborLinkError::AuthenticationError(msg) => write!(f, "Authentication error: {}", msg),
            ArborLinkError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            ArborLinkError::QueryError(msg) => write!(f, "Query error: {}", msg),
            ArborLinkError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ArborLinkError::TimeoutError(msg) => write!(f, "Timeout: {}", msg),
            ArborLinkError::ServerError {
                status_code,
                message,
            } => write!(f, "Server error ({}): {}", status_code, message),
        }
    }
}

impl std::error::Error for ArborLinkError {}

impl From<reqwest::Error> for ArborLinkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ArborLinkError::TimeoutError(err.to_string())
        } else if err.is_connect() {
            ArborLinkError::NetworkError(err.to_string())
        } else if err.is_decode() {
            ArborLinkError::SerializationError(err.to_string())
        } else {
            ArborLinkError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ArborLinkError {
    fn from(err: serde_json::Error) -> Self {
        ArborLinkError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArborLinkError::QueryError("malformed select".into());
        assert_eq!(err.to_string(), "Query error: malformed select");

        let err = ArborLinkError::ServerError {
            status_code: 503,
            message: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "Server error (503): unavailable");
    }
}
