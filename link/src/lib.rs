//! Arbor link — client library for the Arbor record store HTTP API.
//!
//! Provides the query transport used by the `arbor` CLI: a builder-configured
//! HTTP client, authentication header handling, and typed wire models for the
//! environment's query endpoint.
//!
//! # Example
//!
//! ```rust,no_run
//! use arbor_link::ArborLinkClient;
//!
//! # async fn example() -> arbor_link::Result<()> {
//! let client = ArborLinkClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! for record_type in client.active_record_types().await? {
//!     println!("{}.{} -> {}",
//!         record_type.owner_entity_type,
//!         record_type.developer_name,
//!         record_type.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use auth::AuthProvider;
pub use client::{ArborLinkClient, ArborLinkClientBuilder, RECORD_TYPE_QUERY};
pub use error::{ArborLinkError, Result};
pub use models::{ErrorDetail, QueryRequest, QueryResponse, RecordTypeDescriptor};
