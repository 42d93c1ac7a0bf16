//! Matrix editing.
//!
//! [`MatrixEditor`] is the only mutation path into a
//! [`PermissionRegistry`]. An edit is a single-cell flip: one record,
//! one non-admin column. Only a privileged caller may edit.
//!
//! # Decision Order
//!
//! ```text
//! toggle_permission(caller, id, role)
//!   role resolves to admin column?  ──► Ok(AdminColumnLocked)   (no mutation)
//!   caller not privileged?          ──► Err(Unauthorized)       (no mutation)
//!   id unknown?                     ──► Err(UnknownPermission)  (no mutation)
//!   otherwise                       ──► flip cell, Ok(Flipped)
//! ```
//!
//! The admin-column check comes first so the admin invariant holds no
//! matter who asks.

use crate::PermissionRegistry;
use permatrix_auth::{AccessDenied, Actor, ColumnKey, PermissionId, Role, RoleResolver};
use permatrix_types::ErrorCode;
use std::sync::Arc;
use thiserror::Error;

const TOGGLE_OPERATION: &str = "toggle permission";

/// Result of an accepted toggle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The cell was flipped and now holds `granted`.
    Flipped {
        /// The edited record.
        id: PermissionId,
        /// The edited column.
        column: ColumnKey,
        /// The cell's new value.
        granted: bool,
    },
    /// The target was the admin column; nothing changed.
    AdminColumnLocked,
}

impl ToggleOutcome {
    /// Returns `true` if the matrix changed.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Flipped { .. })
    }
}

impl std::fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flipped {
                id,
                column,
                granted,
            } => {
                let verb = if *granted { "granted" } else { "revoked" };
                write!(f, "{id}: {column} {verb}")
            }
            Self::AdminColumnLocked => f.write_str("admin column is locked; nothing changed"),
        }
    }
}

/// Rejected toggle requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The caller may not edit the matrix.
    #[error(transparent)]
    Unauthorized(#[from] AccessDenied),

    /// No record carries the requested id.
    #[error("unknown permission id '{id}'")]
    UnknownPermission {
        /// The requested id.
        id: PermissionId,
    },
}

impl ErrorCode for EditError {
    fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "EDIT_UNAUTHORIZED",
            Self::UnknownPermission { .. } => "EDIT_UNKNOWN_PERMISSION",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A mistyped id can be corrected; a denial cannot.
        matches!(self, Self::UnknownPermission { .. })
    }
}

/// Applies single-cell edits to a shared registry.
///
/// # Example
///
/// ```
/// use permatrix_auth::{Actor, PermissionId, Role};
/// use permatrix_runtime::{AccessEvaluator, MatrixEditor, PermissionRegistry, ToggleOutcome};
/// use std::sync::Arc;
///
/// let registry = Arc::new(PermissionRegistry::builtin().expect("builtin"));
/// let editor = MatrixEditor::new(Arc::clone(&registry));
/// let admin = Actor::new(Role::Admin);
///
/// let outcome = editor
///     .toggle_permission(&admin, &PermissionId::new("hr-salary-view"), Role::User)
///     .expect("admin may edit");
/// assert!(outcome.is_mutation());
///
/// let user = AccessEvaluator::for_role(registry, Role::User);
/// assert!(user.check_permission("View Salary Data"));
/// ```
#[derive(Debug, Clone)]
pub struct MatrixEditor {
    registry: Arc<PermissionRegistry>,
}

impl MatrixEditor {
    /// Creates an editor over `registry`.
    #[must_use]
    pub fn new(registry: Arc<PermissionRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the registry this editor mutates.
    #[must_use]
    pub fn registry(&self) -> &Arc<PermissionRegistry> {
        &self.registry
    }

    /// Flips the grant of `role` on the record `id`.
    ///
    /// Exactly one cell changes on success. A request for the admin
    /// column succeeds as a no-op for every caller.
    ///
    /// # Errors
    ///
    /// - [`EditError::Unauthorized`] if `caller` is not privileged.
    /// - [`EditError::UnknownPermission`] if no record has `id`.
    pub fn toggle_permission(
        &self,
        caller: &Actor,
        id: &PermissionId,
        role: Role,
    ) -> Result<ToggleOutcome, EditError> {
        let column = RoleResolver::resolve(role);
        if column.is_privileged() {
            tracing::debug!(caller = %caller, permission = %id, "admin column toggle ignored");
            return Ok(ToggleOutcome::AdminColumnLocked);
        }

        if !caller.is_privileged() {
            tracing::warn!(
                caller = %caller,
                permission = %id,
                column = %column,
                "matrix edit rejected: caller not privileged"
            );
            return Err(AccessDenied::not_privileged(caller.role(), TOGGLE_OPERATION).into());
        }

        let Some(granted) = self.registry.toggle(id, column) else {
            tracing::warn!(caller = %caller, permission = %id, "matrix edit rejected: unknown id");
            return Err(EditError::UnknownPermission { id: id.clone() });
        };

        tracing::info!(
            caller = %caller,
            permission = %id,
            column = %column,
            granted,
            "permission toggled"
        );
        Ok(ToggleOutcome::Flipped {
            id: id.clone(),
            column,
            granted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permatrix_auth::{PermissionKind, PermissionRecord};
    use permatrix_types::assert_error_codes;

    fn setup() -> MatrixEditor {
        let registry = PermissionRegistry::from_seed(vec![
            PermissionRecord::new("a", "M", PermissionKind::Feature, "Alpha"),
            PermissionRecord::new("b", "M", PermissionKind::Data, "Beta").allow(ColumnKey::User),
        ])
        .expect("seed");
        MatrixEditor::new(Arc::new(registry))
    }

    #[test]
    fn admin_flips_one_cell() {
        let editor = setup();
        let before = editor.registry().snapshot();

        let outcome = editor
            .toggle_permission(&Actor::new(Role::Admin), &PermissionId::new("b"), Role::User)
            .expect("toggle");
        assert_eq!(
            outcome,
            ToggleOutcome::Flipped {
                id: PermissionId::new("b"),
                column: ColumnKey::User,
                granted: false,
            }
        );

        let after = editor.registry().snapshot();
        assert_eq!(after[0], before[0]);
        assert!(!after[1].user);
        assert_eq!(after[1].manager, before[1].manager);
        assert_eq!(after[1].viewer, before[1].viewer);
    }

    #[test]
    fn double_toggle_restores() {
        let editor = setup();
        let admin = Actor::new(Role::Admin);
        let id = PermissionId::new("a");
        let before = editor.registry().snapshot();

        editor.toggle_permission(&admin, &id, Role::Viewer).expect("first");
        editor.toggle_permission(&admin, &id, Role::Viewer).expect("second");
        assert_eq!(editor.registry().snapshot(), before);
    }

    #[test]
    fn admin_column_locked_for_every_caller() {
        let editor = setup();
        let before = editor.registry().snapshot();
        for role in Role::ALL {
            let outcome = editor
                .toggle_permission(&Actor::new(role), &PermissionId::new("a"), Role::Admin)
                .expect("no-op");
            assert_eq!(outcome, ToggleOutcome::AdminColumnLocked);
            assert!(!outcome.is_mutation());
        }
        assert_eq!(editor.registry().snapshot(), before);
    }

    #[test]
    fn unprivileged_caller_rejected() {
        let editor = setup();
        let before = editor.registry().snapshot();
        for role in [Role::Manager, Role::User, Role::Viewer] {
            let err = editor
                .toggle_permission(&Actor::new(role), &PermissionId::new("a"), Role::User)
                .expect_err("not privileged");
            assert!(matches!(
                err,
                EditError::Unauthorized(AccessDenied::NotPrivileged { role: r, .. }) if r == role
            ));
        }
        assert_eq!(editor.registry().snapshot(), before);
    }

    #[test]
    fn unknown_id_rejected() {
        let editor = setup();
        let before = editor.registry().snapshot();
        let err = editor
            .toggle_permission(&Actor::new(Role::Admin), &PermissionId::new("zzz"), Role::User)
            .expect_err("unknown");
        assert_eq!(
            err,
            EditError::UnknownPermission {
                id: PermissionId::new("zzz")
            }
        );
        assert_eq!(editor.registry().snapshot(), before);
    }

    #[test]
    fn outcome_display() {
        let flipped = ToggleOutcome::Flipped {
            id: PermissionId::new("hr-salary-view"),
            column: ColumnKey::User,
            granted: true,
        };
        assert_eq!(flipped.to_string(), "hr-salary-view: user granted");
        assert!(ToggleOutcome::AdminColumnLocked.to_string().contains("locked"));
    }

    #[test]
    fn error_codes_follow_convention() {
        assert_error_codes(
            &[
                EditError::Unauthorized(AccessDenied::not_privileged(Role::User, "x")),
                EditError::UnknownPermission {
                    id: PermissionId::new("x"),
                },
            ],
            "EDIT_",
        );
    }
}
