//! Data models for the arbor-link client library.
//!
//! Defines request and response structures for query execution against
//! an Arbor environment.

pub mod error_detail;
pub mod query_request;
pub mod query_response;
pub mod record_type;

#[cfg(test)]
mod tests;

pub use error_detail::ErrorDetail;
pub use query_request::QueryRequest;
pub use query_response::QueryResponse;
pub use record_type::RecordTypeDescriptor;
