//! Permission classification.

use serde::{Deserialize, Serialize};

/// Classification of a permission record.
///
/// The kind drives presentation only (badges, grouping, warnings in an
/// admin surface). It never changes how a permission is evaluated, with
/// one structural exception: navigation routes must be gated by an
/// [`Access`](Self::Access) record.
///
/// | Kind | Gates |
/// |------|-------|
/// | `Access` | Whether a module/route is navigable at all |
/// | `Feature` | An action inside an accessible module |
/// | `Data` | Visibility of a sensitive field |
/// | `Critical` | Destructive or high-impact operations |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionKind {
    /// Module-level navigation gate.
    Access,
    /// In-module action.
    Feature,
    /// Sensitive data visibility.
    Data,
    /// High-impact operation.
    Critical,
}

impl PermissionKind {
    /// All kinds, in presentation order.
    pub const ALL: [Self; 4] = [Self::Access, Self::Feature, Self::Data, Self::Critical];

    /// Returns the seed-format spelling of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "Access",
            Self::Feature => "Feature",
            Self::Data => "Data",
            Self::Critical => "Critical",
        }
    }

    /// Returns `true` for [`Access`](Self::Access).
    #[must_use]
    pub fn is_access(self) -> bool {
        matches!(self, Self::Access)
    }
}

impl std::fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
