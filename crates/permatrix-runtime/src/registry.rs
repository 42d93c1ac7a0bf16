//! In-memory permission registry.
//!
//! Provides [`PermissionRegistry`]: the single, explicitly owned copy of
//! the capability matrix that evaluators read and the editor mutates.
//!
//! # Lifecycle
//!
//! ```text
//! seed (file / builtin) ──from_seed()──► PermissionRegistry
//!                                           │  Arc shared by
//!                                           ├── AccessEvaluator (read)
//!                                           ├── NavigationGate  (read, via evaluator)
//!                                           └── MatrixEditor    (single-cell flip)
//! ```
//!
//! Rows are never inserted, removed, or replaced after construction,
//! so the name and id indexes built at seed time stay valid for the
//! lifetime of the registry.

use crate::seed::{self, SeedError, SeedFormat};
use parking_lot::RwLock;
use permatrix_auth::{ColumnKey, PermissionId, PermissionRecord};
use std::collections::HashMap;
use std::path::Path;

/// Thread-safe owner of the permission matrix.
///
/// Lookups by name resolve to the *first* record carrying that name in
/// seed order; later duplicates are kept (and exported) but never
/// consulted by evaluation.
///
/// # Example
///
/// ```
/// use permatrix_auth::{ColumnKey, PermissionKind, PermissionRecord};
/// use permatrix_runtime::PermissionRegistry;
///
/// let registry = PermissionRegistry::from_seed(vec![
///     PermissionRecord::new("crm-access", "CRM", PermissionKind::Access, "Access CRM Module")
///         .allow(ColumnKey::Viewer),
/// ])
/// .expect("valid seed");
///
/// assert_eq!(registry.grant("Access CRM Module", ColumnKey::Viewer), Some(true));
/// assert_eq!(registry.grant("Access CRM Module", ColumnKey::User), Some(false));
/// assert_eq!(registry.grant("Unknown", ColumnKey::Admin), None);
/// ```
#[derive(Debug)]
pub struct PermissionRegistry {
    matrix: RwLock<Matrix>,
}

#[derive(Debug)]
struct Matrix {
    records: Vec<PermissionRecord>,
    /// Name → index of the first record with that name.
    by_name: HashMap<String, usize>,
    by_id: HashMap<PermissionId, usize>,
}

impl Matrix {
    fn first_named(&self, name: &str) -> Option<&PermissionRecord> {
        self.by_name.get(name).map(|&idx| &self.records[idx])
    }
}

impl PermissionRegistry {
    /// Builds a registry from seed records.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the records violate a seed rule
    /// (empty id or name, duplicate id, admin column denied).
    pub fn from_seed(records: Vec<PermissionRecord>) -> Result<Self, SeedError> {
        seed::validate(&records)?;

        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            by_id.insert(record.id.clone(), idx);
            if let Some(&first) = by_name.get(&record.name) {
                let first: &PermissionRecord = &records[first];
                tracing::warn!(
                    name = %record.name,
                    kept = %first.id,
                    shadowed = %record.id,
                    "duplicate permission name; first record wins"
                );
            } else {
                by_name.insert(record.name.clone(), idx);
            }
        }

        tracing::debug!(records = records.len(), "permission registry seeded");

        Ok(Self {
            matrix: RwLock::new(Matrix {
                records,
                by_name,
                by_id,
            }),
        })
    }

    /// Builds a registry from the builtin business matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] only if the builtin table itself is broken.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_seed(crate::builtin::seed())
    }

    /// Builds a registry from a seed file (`.json` or `.toml`).
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        Self::from_seed(seed::load(path)?)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.read().records.len()
    }

    /// Returns `true` if the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.read().records.is_empty()
    }

    /// Returns the grant in `column` of the first record named `name`,
    /// or `None` if no record has that name.
    #[must_use]
    pub fn grant(&self, name: &str, column: ColumnKey) -> Option<bool> {
        self.matrix
            .read()
            .first_named(name)
            .map(|record| record.grant(column))
    }

    /// Returns a copy of the first record named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PermissionRecord> {
        self.matrix.read().first_named(name).cloned()
    }

    /// Returns a copy of the record with the given id.
    #[must_use]
    pub fn get(&self, id: &PermissionId) -> Option<PermissionRecord> {
        let matrix = self.matrix.read();
        matrix.by_id.get(id).map(|&idx| matrix.records[idx].clone())
    }

    /// Returns a copy of every record in seed order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PermissionRecord> {
        self.matrix.read().records.clone()
    }

    /// Returns module labels in order of first appearance.
    #[must_use]
    pub fn modules(&self) -> Vec<String> {
        let matrix = self.matrix.read();
        let mut modules: Vec<String> = Vec::new();
        for record in &matrix.records {
            if !modules.contains(&record.module) {
                modules.push(record.module.clone());
            }
        }
        modules
    }

    /// Returns copies of the records grouped under `module`, in seed order.
    #[must_use]
    pub fn records_in(&self, module: &str) -> Vec<PermissionRecord> {
        self.matrix
            .read()
            .records
            .iter()
            .filter(|record| record.module == module)
            .cloned()
            .collect()
    }

    /// Returns names carried by more than one record, in seed order.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<String> {
        let matrix = self.matrix.read();
        let mut duplicates: Vec<String> = Vec::new();
        for (idx, record) in matrix.records.iter().enumerate() {
            let first = matrix.by_name.get(&record.name).copied();
            if first != Some(idx) && !duplicates.contains(&record.name) {
                duplicates.push(record.name.clone());
            }
        }
        duplicates
    }

    /// Renders the current matrix in seed format.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if serialization fails.
    pub fn export(&self, format: SeedFormat) -> Result<String, SeedError> {
        seed::render(&self.matrix.read().records, format)
    }

    /// Writes the current matrix to a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] on unknown extension or I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), SeedError> {
        seed::save(path, &self.matrix.read().records)
    }

    /// Flips one cell and returns its new value.
    ///
    /// Returns `None` without mutating if the id is unknown or the column
    /// is the admin column. Only [`MatrixEditor`](crate::MatrixEditor)
    /// calls this.
    pub(crate) fn toggle(&self, id: &PermissionId, column: ColumnKey) -> Option<bool> {
        let mut matrix = self.matrix.write();
        let idx = *matrix.by_id.get(id)?;
        matrix.records[idx].toggle(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permatrix_auth::PermissionKind;

    fn record(id: &str, name: &str) -> PermissionRecord {
        PermissionRecord::new(id, "Test", PermissionKind::Feature, name)
    }

    #[test]
    fn first_match_wins_on_duplicate_name() {
        let registry = PermissionRegistry::from_seed(vec![
            record("first", "Shared").allow(ColumnKey::Viewer),
            record("second", "Shared"),
        ])
        .expect("seed");

        assert_eq!(registry.grant("Shared", ColumnKey::Viewer), Some(true));
        assert_eq!(
            registry.find("Shared").map(|r| r.id),
            Some(PermissionId::new("first"))
        );
        assert_eq!(registry.duplicate_names(), vec!["Shared".to_string()]);
    }

    #[test]
    fn duplicate_name_shadow_is_not_consulted_after_toggle() {
        let registry =
            PermissionRegistry::from_seed(vec![record("first", "Shared"), record("second", "Shared")])
                .expect("seed");

        registry.toggle(&PermissionId::new("second"), ColumnKey::User);
        assert_eq!(registry.grant("Shared", ColumnKey::User), Some(false));
    }

    #[test]
    fn rejects_invalid_seed() {
        let mut bad = record("a", "A");
        bad.admin = false;
        let err = PermissionRegistry::from_seed(vec![bad]).expect_err("admin denied");
        assert!(matches!(err, SeedError::AdminDenied { .. }));
    }

    #[test]
    fn toggle_flips_single_cell() {
        let registry = PermissionRegistry::from_seed(vec![record("a", "A"), record("b", "B")])
            .expect("seed");
        let before = registry.snapshot();

        assert_eq!(registry.toggle(&PermissionId::new("a"), ColumnKey::Manager), Some(true));

        let after = registry.snapshot();
        assert!(after[0].manager);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn toggle_refuses_admin_and_unknown() {
        let registry = PermissionRegistry::from_seed(vec![record("a", "A")]).expect("seed");
        let before = registry.snapshot();

        assert_eq!(registry.toggle(&PermissionId::new("a"), ColumnKey::Admin), None);
        assert_eq!(registry.toggle(&PermissionId::new("zzz"), ColumnKey::User), None);
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn modules_in_first_seen_order() {
        let registry = PermissionRegistry::builtin().expect("builtin");
        let modules = registry.modules();
        assert_eq!(modules.first().map(String::as_str), Some("Dashboard"));
        assert_eq!(modules.last().map(String::as_str), Some("Settings"));
        assert!(registry
            .records_in("HR")
            .iter()
            .all(|record| record.module == "HR"));
    }

    #[test]
    fn get_by_id() {
        let registry = PermissionRegistry::builtin().expect("builtin");
        let salary = registry
            .get(&PermissionId::new("hr-salary-view"))
            .expect("present");
        assert_eq!(salary.name, "View Salary Data");
        assert!(registry.get(&PermissionId::new("nope")).is_none());
    }

    #[test]
    fn empty_registry() {
        let registry = PermissionRegistry::from_seed(Vec::new()).expect("seed");
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.modules().is_empty());
    }
}
