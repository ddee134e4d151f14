//! Error types for arbor-cli
//!
//! Provides user-friendly error messages and context for common import failures.

use arbor_link::ArborLinkError;
use std::fmt;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CLIError>;

/// Errors raised while resolving record type references against a target
/// environment.
///
/// All of these are fatal for the whole run: a document with a single
/// unresolvable reference is not usable, so no partial output is produced.
#[derive(Debug)]
pub enum ResolveError {
    /// The metadata query returned zero active record types. The target
    /// environment's schema has most likely not been deployed yet.
    NoRecordTypesFound,

    /// A record node names an entity type with no record types in the
    /// target environment (schema mismatch between export and target).
    UnknownEntityType(String),

    /// A record node's developer-name reference has no matching active
    /// record type for its entity type in the target environment.
    UnresolvableRecordType {
        entity_type: String,
        developer_name: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NoRecordTypesFound => write!(
                f,
                "No active record types found in the target environment; deploy its schema metadata first"
            ),
            ResolveError::UnknownEntityType(entity_type) => write!(
                f,
                "No record types defined for entity type '{}' in the target environment",
                entity_type
            ),
            ResolveError::UnresolvableRecordType {
                entity_type,
                developer_name,
            } => write!(
                f,
                "No active record type named '{}' for entity type '{}' in the target environment",
                developer_name, entity_type
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Errors that can occur in the CLI
#[derive(Debug)]
pub enum CLIError {
    /// Error from the arbor-link library
    LinkError(ArborLinkError),

    /// Record type resolution failure
    ResolveError(ResolveError),

    /// Configuration file error
    ConfigurationError(String),

    /// File I/O error
    FileError(String),

    /// Invalid JSON in a tree export file or plan
    ParseError(String),

    /// Neither --file nor --plan was supplied
    MissingInput,
}

impl fmt::Display for CLIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLIError::LinkError(e) => write!(f, "{}", e),
            CLIError::ResolveError(e) => write!(f, "{}", e),
            CLIError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            CLIError::FileError(msg) => write!(f, "File error: {}", msg),
            CLIError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CLIError::MissingInput => write!(f, "Either --file or --plan is required"),
        }
    }
}

impl std::error::Error for CLIError {}

impl From<ArborLinkError> for CLIError {
    fn from(err: ArborLinkError) -> Self {
        CLIError::LinkError(err)
    }
}

impl From<ResolveError> for CLIError {
    fn from(err: ResolveError) -> Self {
        CLIError::ResolveError(err)
    }
}

impl From<std::io::Error> for CLIError {
    fn from(err: std::io::Error) -> Self {
        CLIError::FileError(err.to_string())
    }
}

impl From<toml::de::Error> for CLIError {
    fn from(err: toml::de::Error) -> Self {
        CLIError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CLIError::MissingInput;
        assert_eq!(err.to_string(), "Either --file or --plan is required");

        let err = CLIError::FileError("missing data.json".into());
        assert_eq!(err.to_string(), "File error: missing data.json");
    }

    #[test]
    fn test_resolve_error_names_the_offender() {
        let err = ResolveError::UnresolvableRecordType {
            entity_type: "Account".into(),
            developer_name: "NotReal".into(),
        };
        let message = err.to_string();
        assert!(message.contains("Account"));
        assert!(message.contains("NotReal"));

        let err = ResolveError::UnknownEntityType("Widget".into());
        assert!(err.to_string().contains("Widget"));
    }
}
