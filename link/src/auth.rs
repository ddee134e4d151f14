//! Authentication provider for the Arbor client.
//!
//! Handles JWT tokens and HTTP Basic Auth, attaching appropriate headers to HTTP requests.

use crate::error::Result;
use base64::{engine::general_purpose, Engine as _};

/// Authentication credentials for an Arbor environment.
///
/// Supports JWT tokens and HTTP Basic Auth.
/// The auth provider automatically attaches the appropriate Authorization header.
///
/// # Examples
///
/// ```rust
/// use arbor_link::AuthProvider;
///
/// // HTTP Basic Auth
/// let auth = AuthProvider::basic_auth("username".to_string(), "password".to_string());
///
/// // JWT token authentication
/// let auth = AuthProvider::jwt_token("eyJhbGc...".to_string());
///
/// // No authentication (localhost bypass mode)
/// let auth = AuthProvider::none();
/// ```
#[derive(Debug, Clone)]
pub enum AuthProvider {
    /// HTTP Basic Auth (username, password)
    BasicAuth(String, String),

    /// JWT token authentication
    JwtToken(String),

    /// No authentication (localhost bypass)
    None,
}

impl AuthProvider {
    /// Create HTTP Basic Auth
    ///
    /// Encodes username:password as base64 for the Authorization: Basic header
    /// following RFC 7617.
    pub fn basic_auth(username: String, password: String) -> Self {
        Self::BasicAuth(username, password)
    }

    /// Create JWT token authentication
    pub fn jwt_token(token: String) -> Self {
        Self::JwtToken(token)
    }

    /// No authentication (for localhost bypass mode)
    pub fn none() -> Self {
        Self::None
    }

    /// Attach authentication headers to an HTTP request builder
    pub fn apply_to_request(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        match self {
            AuthProvider::BasicAuth(username, password) => Ok(builder.header(
                "Authorization",
                format!("Basic {}", encode_basic(username, password)),
            )),
            AuthProvider::JwtToken(token) => {
                Ok(builder.header("Authorization", format!("Bearer {}", token)))
            }
            AuthProvider::None => Ok(builder),
        }
    }
}

fn encode_basic(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    general_purpose::STANDARD.encode(credentials.as_bytes())
}
