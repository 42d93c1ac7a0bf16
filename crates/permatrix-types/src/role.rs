//! Actor roles and matrix columns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four fixed actor classifications.
///
/// The set is closed. Text that does not name one of these roles is a
/// configuration error ([`ParseRoleError`]), never a fifth "unknown"
/// role that quietly gets denied.
///
/// Code outside `permatrix_auth::RoleResolver` must not derive grants
/// from a `Role` directly; resolve it to a [`ColumnKey`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Privileged role. Never deniable through the matrix.
    Admin,
    /// Department lead.
    Manager,
    /// Regular staff member.
    User,
    /// Read-mostly observer.
    Viewer,
}

impl Role {
    /// All roles, in matrix column order.
    pub const ALL: [Self; 4] = [Self::Admin, Self::Manager, Self::User, Self::Viewer];

    /// Returns the lowercase wire spelling of this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
            Self::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    /// Parses a role name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "user" => Ok(Self::User),
            "viewer" => Ok(Self::Viewer),
            _ => Err(ParseRoleError {
                value: s.to_string(),
            }),
        }
    }
}

/// Text did not name one of the four roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized role '{value}' (expected admin, manager, user, or viewer)")]
pub struct ParseRoleError {
    /// The rejected input.
    pub value: String,
}

/// A column of the permission matrix.
///
/// Each permission record carries one boolean per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKey {
    /// Grants of the privileged role. Always `true`.
    Admin,
    /// Manager grants.
    Manager,
    /// User grants.
    User,
    /// Viewer grants.
    Viewer,
}

impl ColumnKey {
    /// All columns, in seed field order.
    pub const ALL: [Self; 4] = [Self::Admin, Self::Manager, Self::User, Self::Viewer];

    /// Returns the seed field name of this column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
            Self::Viewer => "viewer",
        }
    }

    /// Returns `true` for the privileged column.
    #[must_use]
    pub fn is_privileged(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
