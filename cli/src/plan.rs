//! Tree export plans.
//!
//! A plan is a JSON array of entries, each naming an entity type and the
//! tree export files to load for it:
//!
//! ```json
//! [
//!   { "entityType": "Account", "resolveRefs": true, "files": ["accounts.json"] },
//!   { "entityType": "Opportunity", "files": ["opportunities.json"] }
//! ]
//! ```
//!
//! File paths are relative to the plan file's directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CLIError, Result};

/// One plan entry: an entity type and its export files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    /// Entity type the listed files contain at their top level
    pub entity_type: String,

    /// Whether reference ids assigned during load should be saved for
    /// later entries (consumed by the insert step, carried here for
    /// plan-format fidelity)
    #[serde(default)]
    pub save_refs: bool,

    /// Whether previously saved reference ids should be substituted into
    /// these files (ditto)
    #[serde(default)]
    pub resolve_refs: bool,

    /// Tree export files, relative to the plan file
    pub files: Vec<PathBuf>,
}

/// A loaded import plan.
#[derive(Debug, Clone)]
pub struct ImportPlan {
    pub entries: Vec<PlanEntry>,
    base_dir: PathBuf,
}

impl ImportPlan {
    /// Load a plan from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CLIError::FileError(format!("Failed to read {}: {}", path.display(), e)))?;
        let entries: Vec<PlanEntry> = serde_json::from_str(&contents).map_err(|e| {
            CLIError::ParseError(format!("Invalid import plan in {}: {}", path.display(), e))
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        Ok(Self { entries, base_dir })
    }

    /// All export files named by the plan, in plan order, resolved against
    /// the plan file's directory.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .flat_map(|entry| entry.files.iter().map(|file| self.base_dir.join(file)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plan_parses_and_resolves_paths() {
        let dir = tempfile::tempdir().unwrap();
        let plan_path = dir.path().join("sample-plan.json");
        let mut file = std::fs::File::create(&plan_path).unwrap();
        write!(
            file,
            r#"[
                {{"entityType": "Account", "saveRefs": true, "files": ["accounts.json"]}},
                {{"entityType": "Opportunity", "files": ["opps/opportunities.json"]}}
            ]"#
        )
        .unwrap();

        let plan = ImportPlan::load(&plan_path).unwrap();

        assert_eq!(plan.entries.len(), 2);
        assert_eq!(plan.entries[0].entity_type, "Account");
        assert!(plan.entries[0].save_refs);
        assert!(!plan.entries[0].resolve_refs);

        let files = plan.file_paths();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0], dir.path().join("accounts.json"));
        assert_eq!(files[1], dir.path().join("opps/opportunities.json"));
    }

    #[test]
    fn test_missing_plan_is_a_file_error() {
        let err = ImportPlan::load(Path::new("no/such/plan.json")).unwrap_err();
        assert!(matches!(err, CLIError::FileError(_)));
    }

    #[test]
    fn test_malformed_plan_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let plan_path = dir.path().join("bad-plan.json");
        std::fs::write(&plan_path, r#"{"not": "an array"}"#).unwrap();

        let err = ImportPlan::load(&plan_path).unwrap_err();
        assert!(matches!(err, CLIError::ParseError(_)));
    }
}
