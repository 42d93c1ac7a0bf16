//! Role to matrix-column resolution.
//!
//! [`RoleResolver`] is the single place that decides which column of the
//! matrix holds an actor's grants. Consumers never branch on [`Role`]
//! themselves, so a change to the mapping cannot drift between modules.

use crate::AccessDenied;
use permatrix_types::{ColumnKey, Role};

/// Pure mapping from an actor's role to the matrix column to read.
///
/// # Example
///
/// ```
/// use permatrix_auth::{ColumnKey, Role, RoleResolver};
///
/// assert_eq!(RoleResolver::resolve(Role::Viewer), ColumnKey::Viewer);
///
/// // Text boundaries fail loudly instead of quietly denying.
/// assert!(RoleResolver::resolve_raw("superuser").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleResolver;

impl RoleResolver {
    /// Resolves a role to its matrix column.
    #[must_use]
    pub fn resolve(role: Role) -> ColumnKey {
        match role {
            Role::Admin => ColumnKey::Admin,
            Role::Manager => ColumnKey::Manager,
            Role::User => ColumnKey::User,
            Role::Viewer => ColumnKey::Viewer,
        }
    }

    /// Parses a role name and resolves it.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied::UnknownRole`] for text that does not name a
    /// role. This is a configuration fault, distinct from a denial.
    pub fn resolve_raw(role: &str) -> Result<ColumnKey, AccessDenied> {
        let role: Role = role.parse()?;
        Ok(Self::resolve(role))
    }

    /// Returns `true` if the role resolves to the privileged column.
    #[must_use]
    pub fn is_privileged(role: Role) -> bool {
        Self::resolve(role).is_privileged()
    }
}
