//! Permission identifiers.

use serde::{Deserialize, Serialize};

/// Stable identifier of a single permission record.
///
/// Ids are assigned when a seed is authored and never change or get
/// reused afterwards. Unlike the record's `name`, the id is not a lookup
/// key for evaluation; it addresses a row for the matrix editor and for
/// seed round-trips.
///
/// Serializes as a bare string.
///
/// # Example
///
/// ```
/// use permatrix_types::PermissionId;
///
/// let id = PermissionId::new("hr-salary-view");
/// assert_eq!(id.to_string(), "hr-salary-view");
/// assert_eq!(PermissionId::from("hr-salary-view"), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionId(String);

impl PermissionId {
    /// Creates an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the id is empty (rejected by seed validation).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PermissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PermissionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PermissionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for PermissionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
