//! Permission records (matrix rows).

use permatrix_types::{ColumnKey, PermissionId, PermissionKind};
use serde::{Deserialize, Serialize};

/// One row of the capability matrix.
///
/// The field layout is the seed format: a persistence layer that
/// round-trips records must reproduce every field, including `id` and
/// all four grants, for evaluation to stay unchanged after reload.
///
/// # Invariants
///
/// - `admin` is always `true`. [`new`](Self::new) sets it and
///   [`toggle`](Self::toggle) refuses to touch it; the registry rejects
///   seeds that violate it.
/// - `name` is the evaluation key and should be unique across a matrix.
///
/// # Example
///
/// ```
/// use permatrix_auth::{ColumnKey, PermissionKind, PermissionRecord};
///
/// let record = PermissionRecord::new("hr-salary-view", "HR", PermissionKind::Data, "View Salary Data")
///     .allow(ColumnKey::Manager);
///
/// assert!(record.grant(ColumnKey::Admin));
/// assert!(record.grant(ColumnKey::Manager));
/// assert!(!record.grant(ColumnKey::Viewer));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    /// Stable row identifier.
    pub id: PermissionId,
    /// Display grouping label.
    pub module: String,
    /// Presentation classification.
    pub kind: PermissionKind,
    /// Lookup key passed to the evaluator.
    pub name: String,
    /// Admin grant. Always `true`.
    pub admin: bool,
    /// Manager grant.
    pub manager: bool,
    /// User grant.
    pub user: bool,
    /// Viewer grant.
    pub viewer: bool,
}

impl PermissionRecord {
    /// Creates a record granted to admin only.
    #[must_use]
    pub fn new(
        id: impl Into<PermissionId>,
        module: impl Into<String>,
        kind: PermissionKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            module: module.into(),
            kind,
            name: name.into(),
            admin: true,
            manager: false,
            user: false,
            viewer: false,
        }
    }

    /// Grants the record to an additional column.
    #[must_use]
    pub fn allow(mut self, column: ColumnKey) -> Self {
        *self.cell_mut(column) = true;
        self
    }

    /// Grants the record to every column.
    #[must_use]
    pub fn allow_all(self) -> Self {
        ColumnKey::ALL
            .into_iter()
            .fold(self, |record, column| record.allow(column))
    }

    /// Returns the grant stored in `column`.
    #[must_use]
    pub fn grant(&self, column: ColumnKey) -> bool {
        match column {
            ColumnKey::Admin => self.admin,
            ColumnKey::Manager => self.manager,
            ColumnKey::User => self.user,
            ColumnKey::Viewer => self.viewer,
        }
    }

    /// Returns every `(column, grant)` pair in column order.
    #[must_use]
    pub fn grants(&self) -> [(ColumnKey, bool); 4] {
        ColumnKey::ALL.map(|column| (column, self.grant(column)))
    }

    /// Flips the grant in `column` and returns the new value.
    ///
    /// Returns `None` without changing anything for the admin column.
    pub fn toggle(&mut self, column: ColumnKey) -> Option<bool> {
        if column.is_privileged() {
            return None;
        }
        let cell = self.cell_mut(column);
        *cell = !*cell;
        Some(*cell)
    }

    fn cell_mut(&mut self, column: ColumnKey) -> &mut bool {
        match column {
            ColumnKey::Admin => &mut self.admin,
            ColumnKey::Manager => &mut self.manager,
            ColumnKey::User => &mut self.user,
            ColumnKey::Viewer => &mut self.viewer,
        }
    }
}
