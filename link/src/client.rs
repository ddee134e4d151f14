//! Main Arbor client with builder pattern.
//!
//! Provides the primary interface for connecting to an Arbor environment
//! and executing queries against its metadata.

use crate::{
    auth::AuthProvider,
    error::{ArborLinkError, Result},
    models::{QueryResponse, RecordTypeDescriptor},
    query::QueryExecutor,
};
use std::time::Duration;

/// Metadata query for all active record type definitions in an environment.
///
/// Restricted to active types: the store enforces developer-name uniqueness
/// per entity type among active record types only.
pub const RECORD_TYPE_QUERY: &str =
    "SELECT id, developerName, ownerEntityType FROM RecordType WHERE active = true";

/// Main Arbor client.
///
/// Use [`ArborLinkClientBuilder`] to construct instances with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use arbor_link::ArborLinkClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ArborLinkClient::builder()
///     .base_url("http://localhost:8080")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()?;
///
/// let record_types = client.active_record_types().await?;
/// println!("{} active record types", record_types.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ArborLinkClient {
    base_url: String,
    query_executor: QueryExecutor,
}

impl ArborLinkClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> ArborLinkClientBuilder {
        ArborLinkClientBuilder::new()
    }

    /// Execute a raw query against the environment
    pub async fn execute_query(&self, query: &str) -> Result<QueryResponse> {
        self.query_executor.execute(query).await
    }

    /// Fetch all active record type definitions from the environment.
    ///
    /// This is the one read contract the import pipeline consumes: a single
    /// query, no pagination handling beyond what the server returns.
    pub async fn active_record_types(&self) -> Result<Vec<RecordTypeDescriptor>> {
        let response = self.execute_query(RECORD_TYPE_QUERY).await?;
        response.typed_records()
    }

    /// Base URL of the target environment
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Builder for configuring [`ArborLinkClient`] instances.
pub struct ArborLinkClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    connect_timeout: Duration,
    auth: AuthProvider,
    max_retries: u32,
}

impl ArborLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            auth: AuthProvider::none(),
            max_retries: 3,
        }
    }

    /// Set the base URL for the target environment
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set request timeout (for HTTP requests)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connection timeout (TCP + TLS handshake)
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set JWT token authentication
    pub fn jwt_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthProvider::jwt_token(token.into());
        self
    }

    /// Set authentication provider directly
    ///
    /// Allows setting any AuthProvider variant including BasicAuth.
    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth;
        self
    }

    /// Set maximum number of retries for failed requests
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ArborLinkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ArborLinkError::ConfigurationError("base_url is required".into()))?;

        // Keep-alive connections reduce TCP handshake overhead on repeated calls
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| ArborLinkError::ConfigurationError(e.to_string()))?;

        let query_executor = QueryExecutor::new(
            base_url.clone(),
            http_client,
            self.auth,
            self.max_retries,
        );

        Ok(ArborLinkClient {
            base_url,
            query_executor,
        })
    }
}
