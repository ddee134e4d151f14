use serde::{Deserialize, Serialize};

/// One active record type definition in a target environment.
///
/// Record types are identified portably by `developer_name` and, per
/// environment, by the opaque `id` the environment assigned when the type
/// was deployed. The same developer name maps to a different `id` in every
/// environment, which is why exported data carries names and has to be
/// translated before loading.
///
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTypeDescriptor {
    /// Environment-specific record type identifier
    pub id: String,

    /// Portable developer-assigned name, unique per entity type among
    /// active record types
    pub developer_name: String,

    /// Entity type this record type belongs to
    pub owner_entity_type: String,
}
