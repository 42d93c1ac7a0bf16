//! Field-level redaction.
//!
//! A sensitive field is guarded by two independent permissions: one to
//! see the value and one to change it. Rendering code asks a
//! [`FieldGuard`] for a [`FieldAccess`] and shows either the value or
//! [`MASK`], and either an editable or read-only control.
//!
//! View and edit are evaluated independently. An actor can hold edit
//! without view; the guard reports that combination faithfully and
//! leaves it to the host to decide what such a control looks like.

use permatrix_auth::{AccessPolicy, AccessState};
use serde::{Deserialize, Serialize};

/// Placeholder shown instead of a value the actor may not view.
pub const MASK: &str = "••••••";

/// The pair of permissions guarding one sensitive field.
///
/// # Example
///
/// ```
/// use permatrix_auth::Role;
/// use permatrix_runtime::{AccessEvaluator, FieldGuard, PermissionRegistry, MASK};
/// use std::sync::Arc;
///
/// let registry = Arc::new(PermissionRegistry::builtin().expect("builtin"));
/// let salary = FieldGuard::new("View Salary Data", "Edit Compensation");
///
/// let user = AccessEvaluator::for_role(Arc::clone(&registry), Role::User);
/// assert_eq!(salary.reveal(&user, 85_000).to_string(), MASK);
///
/// let manager = user.with_role(Role::Manager);
/// assert_eq!(salary.reveal(&manager, 85_000).to_string(), "85000");
/// assert!(!salary.evaluate(&manager).can_edit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGuard {
    view: String,
    edit: String,
}

impl FieldGuard {
    /// Creates a guard from its view and edit permission names.
    pub fn new(view: impl Into<String>, edit: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            edit: edit.into(),
        }
    }

    /// Returns the permission name that reveals the value.
    #[must_use]
    pub fn view_permission(&self) -> &str {
        &self.view
    }

    /// Returns the permission name that allows changing the value.
    #[must_use]
    pub fn edit_permission(&self) -> &str {
        &self.edit
    }

    /// Evaluates both permissions for the policy's actor.
    pub fn evaluate<P: AccessPolicy + ?Sized>(&self, policy: &P) -> FieldAccess {
        FieldAccess {
            view: policy.access_state(&self.view),
            edit: policy.access_state(&self.edit),
        }
    }

    /// Wraps `value` so that it only displays when the view permission
    /// is held.
    pub fn reveal<P: AccessPolicy + ?Sized, T>(&self, policy: &P, value: T) -> Redacted<T> {
        if policy.check_permission(&self.view) {
            Redacted::Visible(value)
        } else {
            tracing::trace!(permission = %self.view, "field masked");
            Redacted::Masked
        }
    }
}

/// Derived view/edit states for one field and one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAccess {
    /// Whether the real value may be shown.
    pub view: AccessState,
    /// Whether the value may be changed.
    pub edit: AccessState,
}

impl FieldAccess {
    /// Returns `true` if the value is shown unmasked.
    #[must_use]
    pub fn can_view(self) -> bool {
        self.view.is_granted()
    }

    /// Returns `true` if the control is editable.
    #[must_use]
    pub fn can_edit(self) -> bool {
        self.edit.is_granted()
    }
}

/// A value that may have been withheld from the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redacted<T> {
    /// The actor may see the value.
    Visible(T),
    /// The value was withheld; displays as [`MASK`].
    Masked,
}

impl<T> Redacted<T> {
    /// Returns the value if visible.
    pub fn visible(self) -> Option<T> {
        match self {
            Self::Visible(value) => Some(value),
            Self::Masked => None,
        }
    }

    /// Returns `true` if the value was withheld.
    #[must_use]
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Masked)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visible(value) => value.fmt(f),
            Self::Masked => f.write_str(MASK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Allow(&'static [&'static str]);

    impl AccessPolicy for Allow {
        fn check_permission(&self, name: &str) -> bool {
            self.0.contains(&name)
        }
    }

    fn guard() -> FieldGuard {
        FieldGuard::new("View Salary Data", "Edit Compensation")
    }

    #[test]
    fn view_and_edit_are_independent() {
        let cases = [
            (Allow(&[]), false, false),
            (Allow(&["View Salary Data"]), true, false),
            (Allow(&["Edit Compensation"]), false, true),
            (Allow(&["View Salary Data", "Edit Compensation"]), true, true),
        ];
        for (policy, view, edit) in cases {
            let access = guard().evaluate(&policy);
            assert_eq!(access.can_view(), view, "{:?}", policy.0);
            assert_eq!(access.can_edit(), edit, "{:?}", policy.0);
        }
    }

    #[test]
    fn reveal_masks_without_view() {
        let redacted = guard().reveal(&Allow(&["Edit Compensation"]), 120_000);
        assert!(redacted.is_masked());
        assert_eq!(redacted.to_string(), MASK);
        assert_eq!(redacted.visible(), None);
    }

    #[test]
    fn reveal_shows_with_view() {
        let redacted = guard().reveal(&Allow(&["View Salary Data"]), "$120,000");
        assert_eq!(redacted.to_string(), "$120,000");
        assert_eq!(redacted.visible(), Some("$120,000"));
    }

    #[test]
    fn works_through_dyn_policy() {
        let policy: &dyn AccessPolicy = &Allow(&["View Salary Data"]);
        assert!(guard().evaluate(policy).can_view());
    }
}
