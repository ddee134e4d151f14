//! Library entry point for arbor-cli components.
//!
//! Exposes reusable modules (document model, record type index, resolver,
//! session, config) so integration tests can exercise import behavior
//! without going through the binary entry point.

pub mod config;
pub mod document;
pub mod error;
pub mod plan;
pub mod recordtypes;
pub mod resolve;
pub mod session;

pub use config::CLIConfiguration;
pub use document::{
    FieldValue, ImportDocument, NestedRecords, RecordAttributes, RecordNode, RecordTypeRef,
};
pub use error::{CLIError, ResolveError, Result};
pub use plan::{ImportPlan, PlanEntry};
pub use recordtypes::RecordTypeIndex;
pub use resolve::{resolve_document, resolve_records};
pub use session::ImportSession;
