//! Typed model for tree export documents.
//!
//! A tree export file is a JSON document with a top-level `records` array.
//! Each record carries an `attributes` object naming its entity type, an
//! optional `RecordTypeId` reference, and any number of data fields. A field
//! whose value is an object with a nested `records` array is a relationship
//! to child records; everything else is opaque scalar data.
//!
//! The nested-or-scalar distinction is made once, at load time, by the
//! [`FieldValue`] type — traversal code matches on the declared variants
//! instead of probing raw JSON objects for a `records` key.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{CLIError, Result};

/// A loaded tree export document: the top-level ordered record sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportDocument {
    pub records: Vec<RecordNode>,
}

/// One record of the import document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordNode {
    /// Entity type and provisional reference id
    pub attributes: RecordAttributes,

    /// Record type reference, if the record carries one.
    ///
    /// Absent or JSON null both load as `None`.
    #[serde(
        rename = "RecordTypeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub record_type: Option<RecordTypeRef>,

    /// All remaining fields: scalar data and nested relationships
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

/// The mandatory `attributes` sub-structure of a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttributes {
    /// Owning entity type name
    #[serde(rename = "type")]
    pub entity_type: String,

    /// Provisional reference identifier assigned at export time
    pub reference_id: String,

    /// Any further attribute keys, preserved for round-tripping
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// A record field: either a nested relationship or opaque scalar data.
///
/// Untagged; the relationship shape is tried first, so an object exposing a
/// `records` array of well-formed records loads as `Children` and every
/// other value falls through to `Scalar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Children(NestedRecords),
    Scalar(JsonValue),
}

/// A nested relationship: a further ordered sequence of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestedRecords {
    pub records: Vec<RecordNode>,
}

/// State of a record type reference.
///
/// On the wire both an unresolved developer name and a resolved identifier
/// are plain strings, so deserialization always lands on `DeveloperName`;
/// the `Id` state only exists in-process, produced by resolution. Keeping
/// the two apart makes re-resolving an already-resolved document a no-op
/// instead of a spurious lookup failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordTypeRef {
    /// Portable developer name, still to be resolved
    DeveloperName(String),

    /// Environment-specific identifier (never produced by deserialization)
    Id(String),

    /// Non-string placeholder, passed through untouched
    Other(JsonValue),
}

impl ImportDocument {
    /// Load a tree export document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CLIError::FileError(format!("Failed to read {}: {}", path.display(), e)))?;
        let document: Self = serde_json::from_str(&contents).map_err(|e| {
            CLIError::ParseError(format!("Invalid tree data in {}: {}", path.display(), e))
        })?;
        Ok(document)
    }

    /// Serialize the document back to pretty-printed JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CLIError::ParseError(format!("Failed to serialize document: {}", e)))
    }

    /// Total number of records, including all nested relationship levels.
    pub fn record_count(&self) -> usize {
        self.records.iter().map(RecordNode::subtree_len).sum()
    }
}

impl RecordNode {
    /// Number of records in this node's subtree, itself included.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .fields
            .values()
            .map(|field| match field {
                FieldValue::Children(children) => {
                    children.records.iter().map(RecordNode::subtree_len).sum()
                }
                FieldValue::Scalar(_) => 0,
            })
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_node(value: JsonValue) -> RecordNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_string_reference_loads_as_developer_name() {
        let node = parse_node(json!({
            "attributes": {"type": "Account", "referenceId": "AccountRef1"},
            "RecordTypeId": "Partner",
            "Name": "Acme"
        }));

        assert_eq!(node.attributes.entity_type, "Account");
        assert_eq!(node.attributes.reference_id, "AccountRef1");
        assert_eq!(
            node.record_type,
            Some(RecordTypeRef::DeveloperName("Partner".into()))
        );
        assert!(matches!(node.fields.get("Name"), Some(FieldValue::Scalar(_))));
    }

    #[test]
    fn test_null_reference_loads_as_none() {
        let node = parse_node(json!({
            "attributes": {"type": "Account", "referenceId": "AccountRef1"},
            "RecordTypeId": null
        }));
        assert!(node.record_type.is_none());
    }

    #[test]
    fn test_non_string_reference_loads_as_other() {
        let node = parse_node(json!({
            "attributes": {"type": "Account", "referenceId": "AccountRef1"},
            "RecordTypeId": 42
        }));
        assert_eq!(node.record_type, Some(RecordTypeRef::Other(json!(42))));
    }

    #[test]
    fn test_relationship_field_loads_as_children() {
        let node = parse_node(json!({
            "attributes": {"type": "Account", "referenceId": "AccountRef1"},
            "Contacts": {
                "records": [
                    {"attributes": {"type": "Contact", "referenceId": "ContactRef1"}}
                ]
            },
            "BillingCity": "Lisbon"
        }));

        match node.fields.get("Contacts") {
            Some(FieldValue::Children(children)) => {
                assert_eq!(children.records.len(), 1);
                assert_eq!(children.records[0].attributes.entity_type, "Contact");
            }
            other => panic!("expected Children, got {:?}", other),
        }
        assert!(matches!(
            node.fields.get("BillingCity"),
            Some(FieldValue::Scalar(_))
        ));
    }

    #[test]
    fn test_reference_serializes_transparently() {
        let mut node = parse_node(json!({
            "attributes": {"type": "Account", "referenceId": "AccountRef1"},
            "RecordTypeId": "Partner"
        }));
        node.record_type = Some(RecordTypeRef::Id("012A".into()));

        let wire = serde_json::to_value(&node).unwrap();
        assert_eq!(wire["RecordTypeId"], "012A");
        assert_eq!(wire["attributes"]["type"], "Account");
        assert_eq!(wire["attributes"]["referenceId"], "AccountRef1");
    }

    #[test]
    fn test_absent_reference_not_serialized() {
        let node = parse_node(json!({
            "attributes": {"type": "Account", "referenceId": "AccountRef1"}
        }));
        let wire = serde_json::to_value(&node).unwrap();
        assert!(wire.get("RecordTypeId").is_none());
    }

    #[test]
    fn test_record_count_spans_nesting() {
        let document: ImportDocument = serde_json::from_value(json!({
            "records": [
                {
                    "attributes": {"type": "Account", "referenceId": "AccountRef1"},
                    "Contacts": {
                        "records": [
                            {"attributes": {"type": "Contact", "referenceId": "ContactRef1"}},
                            {"attributes": {"type": "Contact", "referenceId": "ContactRef2"}}
                        ]
                    },
                    "Opportunities": {
                        "records": [
                            {"attributes": {"type": "Opportunity", "referenceId": "OppRef1"}}
                        ]
                    }
                }
            ]
        }))
        .unwrap();

        assert_eq!(document.record_count(), 4);
    }
}
