//! Query execution with HTTP transport.

use crate::{
    auth::AuthProvider,
    error::{ArborLinkError, Result},
    models::{QueryRequest, QueryResponse},
};
use log::{debug, warn};
use std::time::Instant;

/// Handles query execution via HTTP.
#[derive(Clone)]
pub struct QueryExecutor {
    base_url: String,
    http_client: reqwest::Client,
    auth: AuthProvider,
    max_retries: u32,
}

impl QueryExecutor {
    pub(crate) fn new(
        base_url: String,
        http_client: reqwest::Client,
        auth: AuthProvider,
        max_retries: u32,
    ) -> Self {
        Self {
            base_url,
            http_client,
            auth,
            max_retries,
        }
    }

    /// Execute a query against the environment's query endpoint
    pub async fn execute(&self, query: &str) -> Result<QueryResponse> {
        let request = QueryRequest {
            query: query.to_string(),
        };

        let query_preview = if query.len() > 80 {
            format!("{}...", &query[..80])
        } else {
            query.to_string()
        };
        debug!(
            "[LINK_QUERY] Starting query: \"{}\" (len={})",
            query_preview.replace('\n', " "),
            query.len()
        );

        let overall_start = Instant::now();
        let mut retries = 0;

        loop {
            // Build request fresh on each attempt (can't clone request builders with bodies)
            let url = format!("{}/v1/api/query", self.base_url);
            let mut req_builder = self.http_client.post(&url).json(&request);
            req_builder = self.auth.apply_to_request(req_builder)?;

            let attempt_start = Instant::now();
            debug!(
                "[LINK_HTTP] Sending POST to {} (attempt {}/{})",
                url,
                retries + 1,
                self.max_retries + 1
            );

            match req_builder.send().await {
                Ok(response) => {
                    let http_duration_ms = attempt_start.elapsed().as_millis();
                    let status = response.status();
                    debug!(
                        "[LINK_HTTP] Response received: status={} duration_ms={}",
                        status, http_duration_ms
                    );

                    if status.is_success() {
                        let query_response: QueryResponse = response.json().await?;
                        debug!(
                            "[LINK_QUERY] Success: rows={} total_ms={}",
                            query_response.records.len(),
                            overall_start.elapsed().as_millis()
                        );
                        return Ok(query_response);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());

                        // Try to parse as QueryResponse to extract the error detail
                        let error_message = if let Ok(json_response) =
                            serde_json::from_str::<QueryResponse>(&error_text)
                        {
                            if let Some(err) = json_response.error {
                                err.message
                            } else {
                                error_text
                            }
                        } else {
                            error_text
                        };

                        warn!(
                            "[LINK_HTTP] Server error: status={} message=\"{}\" duration_ms={}",
                            status, error_message, http_duration_ms
                        );

                        return Err(ArborLinkError::ServerError {
                            status_code: status.as_u16(),
                            message: error_message,
                        });
                    }
                }
                Err(e) if retries < self.max_retries && Self::is_retriable(&e) => {
                    warn!(
                        "[LINK_HTTP] Retriable error (attempt {}/{}): {} duration_ms={}",
                        retries + 1,
                        self.max_retries + 1,
                        e,
                        attempt_start.elapsed().as_millis()
                    );
                    retries += 1;
                    tokio::time::sleep(tokio::time::Duration::from_millis(100 * retries as u64))
                        .await;
                    continue;
                }
                Err(e) => {
                    warn!(
                        "[LINK_HTTP] Fatal error: {} total_ms={}",
                        e,
                        overall_start.elapsed().as_millis()
                    );
                    return Err(e.into());
                }
            }
        }
    }

    fn is_retriable(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }
}
