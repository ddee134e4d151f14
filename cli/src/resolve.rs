//! Tree resolver: rewrites record type references across a whole document.
//!
//! Walks the record tree depth-first in pre-order, replacing every
//! developer-name reference with the id the target environment assigned,
//! and recursing into every nested relationship at every depth. The first
//! unresolvable reference aborts the run; a partially resolved document is
//! never usable.

use log::debug;

use crate::document::{FieldValue, ImportDocument, RecordNode, RecordTypeRef};
use crate::error::ResolveError;
use crate::recordtypes::RecordTypeIndex;

/// Resolve every record type reference in the document, in place.
///
/// Returns the number of references rewritten.
pub fn resolve_document(
    document: &mut ImportDocument,
    index: &RecordTypeIndex,
) -> Result<usize, ResolveError> {
    let resolved = resolve_records(&mut document.records, index)?;
    debug!("[RESOLVE] Rewrote {} record type references", resolved);
    Ok(resolved)
}

/// Resolve one record sequence and everything nested beneath it.
pub fn resolve_records(
    records: &mut [RecordNode],
    index: &RecordTypeIndex,
) -> Result<usize, ResolveError> {
    let mut resolved = 0;

    for record in records.iter_mut() {
        if let Some(RecordTypeRef::DeveloperName(name)) = &record.record_type {
            let id = index.resolve(&record.attributes.entity_type, name)?;
            record.record_type = Some(RecordTypeRef::Id(id.to_string()));
            resolved += 1;
        }
        // Already-resolved ids and non-string placeholders pass through.

        for value in record.fields.values_mut() {
            if let FieldValue::Children(children) = value {
                resolved += resolve_records(&mut children.records, index)?;
            }
        }
    }

    Ok(resolved)
}
