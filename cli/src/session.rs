//! Import session: orchestrates one run of the resolution pipeline.
//!
//! The session fetches the target environment's record type metadata once,
//! builds the lookup index, and then resolves each requested tree export
//! file against it. Fetching the index is the only suspending operation in
//! a run; everything after it is pure in-memory work plus local file I/O.

use arbor_link::ArborLinkClient;
use colored::Colorize;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::document::ImportDocument;
use crate::error::{CLIError, Result};
use crate::plan::ImportPlan;
use crate::recordtypes::RecordTypeIndex;
use crate::resolve::resolve_document;

/// One import run against a target environment.
pub struct ImportSession {
    client: ArborLinkClient,
    out_dir: Option<PathBuf>,
}

impl ImportSession {
    pub fn new(client: ArborLinkClient, out_dir: Option<PathBuf>) -> Self {
        Self { client, out_dir }
    }

    /// Query the target environment for its active record types and build
    /// the resolution index. Fatal if the environment has none.
    pub async fn load_index(&self) -> Result<RecordTypeIndex> {
        info!(
            "[SESSION] Retrieving record types from {}",
            self.client.base_url()
        );
        let rows = self.client.active_record_types().await?;
        debug!("[SESSION] {} active record types fetched", rows.len());

        let index = RecordTypeIndex::build(rows)?;
        Ok(index)
    }

    /// Resolve a single tree export file and emit the result.
    pub fn import_file(&self, index: &RecordTypeIndex, path: &Path) -> Result<()> {
        debug!("[SESSION] Resolving {}", path.display());
        let mut document = ImportDocument::load(path)?;
        let resolved = resolve_document(&mut document, index)?;
        self.emit(path, &document)?;

        eprintln!(
            "{} {} ({} records, {} references resolved)",
            "✓".green(),
            path.display(),
            document.record_count(),
            resolved
        );
        Ok(())
    }

    /// Resolve every file referenced by a tree export plan, in plan order.
    pub fn import_plan(&self, index: &RecordTypeIndex, path: &Path) -> Result<()> {
        let plan = ImportPlan::load(path)?;
        for entry in &plan.entries {
            debug!(
                "[SESSION] Plan entry '{}' with {} file(s)",
                entry.entity_type,
                entry.files.len()
            );
        }

        for file in plan.file_paths() {
            self.import_file(index, &file)?;
        }
        Ok(())
    }

    /// Write the resolved document to the output directory, or print it to
    /// stdout when none was configured.
    fn emit(&self, source: &Path, document: &ImportDocument) -> Result<()> {
        match &self.out_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                let file_name = source.file_name().ok_or_else(|| {
                    CLIError::FileError(format!("Not a file: {}", source.display()))
                })?;
                let target = dir.join(file_name);
                std::fs::write(&target, document.to_pretty_json()?)?;
                info!("[SESSION] Wrote resolved document to {}", target.display());
            }
            None => println!("{}", document.to_pretty_json()?),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_link::RecordTypeDescriptor;
    use serde_json::json;

    fn session(out_dir: Option<PathBuf>) -> ImportSession {
        let client = ArborLinkClient::builder()
            .base_url("http://localhost:8080")
            .build()
            .unwrap();
        ImportSession::new(client, out_dir)
    }

    fn account_index() -> RecordTypeIndex {
        RecordTypeIndex::build(vec![RecordTypeDescriptor {
            id: "012A".into(),
            developer_name: "Partner".into(),
            owner_entity_type: "Account".into(),
        }])
        .unwrap()
    }

    #[test]
    fn test_import_file_writes_resolved_copy() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("accounts.json");
        std::fs::write(
            &input,
            json!({
                "records": [{
                    "attributes": {"type": "Account", "referenceId": "AccountRef1"},
                    "RecordTypeId": "Partner"
                }]
            })
            .to_string(),
        )
        .unwrap();

        let out_dir = dir.path().join("resolved");
        session(Some(out_dir.clone()))
            .import_file(&account_index(), &input)
            .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out_dir.join("accounts.json")).unwrap())
                .unwrap();
        assert_eq!(written["records"][0]["RecordTypeId"], "012A");
    }

    #[test]
    fn test_import_file_missing_input() {
        let err = session(None)
            .import_file(&account_index(), Path::new("no/such/file.json"))
            .unwrap_err();
        assert!(matches!(err, CLIError::FileError(_)));
    }

    #[test]
    fn test_import_plan_resolves_every_listed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("accounts.json"),
            json!({
                "records": [{
                    "attributes": {"type": "Account", "referenceId": "AccountRef1"},
                    "RecordTypeId": "Partner"
                }]
            })
            .to_string(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("more-accounts.json"),
            json!({
                "records": [{
                    "attributes": {"type": "Account", "referenceId": "AccountRef2"},
                    "RecordTypeId": "Partner"
                }]
            })
            .to_string(),
        )
        .unwrap();
        let plan_path = dir.path().join("plan.json");
        std::fs::write(
            &plan_path,
            json!([{
                "entityType": "Account",
                "files": ["accounts.json", "more-accounts.json"]
            }])
            .to_string(),
        )
        .unwrap();

        let out_dir = dir.path().join("resolved");
        session(Some(out_dir.clone()))
            .import_plan(&account_index(), &plan_path)
            .unwrap();

        assert!(out_dir.join("accounts.json").exists());
        assert!(out_dir.join("more-accounts.json").exists());
    }
}
