//! Record type index for a target environment.
//!
//! Compiles the environment's active record type definitions into a
//! two-level lookup keyed by owning entity type and then by developer name,
//! yielding the environment-specific identifier.

use arbor_link::RecordTypeDescriptor;
use log::debug;
use std::collections::HashMap;

use crate::error::ResolveError;

/// Two-level lookup: entity type -> developer name -> record type id.
///
/// Built once per run from a live metadata query and read-only thereafter.
/// Keys are case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct RecordTypeIndex {
    by_entity: HashMap<String, HashMap<String, String>>,
}

impl RecordTypeIndex {
    /// Build the index from the full set of active record type rows.
    ///
    /// Fails with [`ResolveError::NoRecordTypesFound`] on empty input: an
    /// environment with no active record types has not had its schema
    /// deployed, and nothing downstream could resolve.
    ///
    /// Duplicate `(entity type, developer name)` pairs are last-write-wins;
    /// the store enforces uniqueness among active record types, so a
    /// duplicate here means duplicate rows, not conflicting ids.
    pub fn build(rows: Vec<RecordTypeDescriptor>) -> Result<Self, ResolveError> {
        if rows.is_empty() {
            return Err(ResolveError::NoRecordTypesFound);
        }

        let mut by_entity: HashMap<String, HashMap<String, String>> = HashMap::new();
        for row in rows {
            by_entity
                .entry(row.owner_entity_type)
                .or_default()
                .insert(row.developer_name, row.id);
        }

        debug!(
            "[INDEX] Built record type index covering {} entity types",
            by_entity.len()
        );
        Ok(Self { by_entity })
    }

    /// Look up the environment-specific id for a developer name.
    pub fn resolve(&self, entity_type: &str, developer_name: &str) -> Result<&str, ResolveError> {
        let names = self
            .by_entity
            .get(entity_type)
            .ok_or_else(|| ResolveError::UnknownEntityType(entity_type.to_string()))?;

        names
            .get(developer_name)
            .map(String::as_str)
            .ok_or_else(|| ResolveError::UnresolvableRecordType {
                entity_type: entity_type.to_string(),
                developer_name: developer_name.to_string(),
            })
    }

    /// Number of entity types covered by the index
    pub fn len(&self) -> usize {
        self.by_entity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_entity.is_empty()
    }
}
