//! Actor context (who is asking).

use crate::RoleResolver;
use permatrix_types::{ColumnKey, Role};
use serde::{Deserialize, Serialize};

/// The security context of whoever is evaluating or editing the matrix.
///
/// An actor is an immutable value: [`with_role`](Self::with_role)
/// returns a new actor rather than changing the existing one. How the
/// role was established (login, token, config) is outside this crate.
///
/// # Why No Default?
///
/// There is no safe default role. Defaulting to admin would grant
/// everything and defaulting to viewer would hide a missing role
/// assignment behind a plausible-looking denial. Always construct with
/// [`Actor::new`].
///
/// # Example
///
/// ```
/// use permatrix_auth::{Actor, ColumnKey, Role};
///
/// let actor = Actor::new(Role::Manager).with_label("dana");
/// assert_eq!(actor.column(), ColumnKey::Manager);
/// assert!(!actor.is_privileged());
/// assert_eq!(actor.to_string(), "dana@manager");
///
/// let promoted = actor.with_role(Role::Admin);
/// assert!(promoted.is_privileged());
/// assert!(!actor.is_privileged());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    role: Role,
    label: Option<String>,
}

impl Actor {
    /// Creates an anonymous actor with the given role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self { role, label: None }
    }

    /// Attaches a display label used in audit logs.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the actor's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the display label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the matrix column holding this actor's grants.
    #[must_use]
    pub fn column(&self) -> ColumnKey {
        RoleResolver::resolve(self.role)
    }

    /// Returns `true` if the actor's role resolves to the privileged column.
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        self.column().is_privileged()
    }

    /// Returns a copy of this actor with a different role.
    #[must_use]
    pub fn with_role(&self, role: Role) -> Self {
        Self {
            role,
            label: self.label.clone(),
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.label().unwrap_or("actor"), self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_display() {
        let actor = Actor::new(Role::Viewer);
        assert_eq!(actor.to_string(), "actor@viewer");
        assert!(actor.label().is_none());
    }

    #[test]
    fn column_goes_through_resolver() {
        for role in Role::ALL {
            assert_eq!(Actor::new(role).column(), RoleResolver::resolve(role));
        }
    }

    #[test]
    fn with_role_preserves_label() {
        let actor = Actor::new(Role::User).with_label("kim");
        let viewer = actor.with_role(Role::Viewer);
        assert_eq!(viewer.label(), Some("kim"));
        assert_eq!(viewer.role(), Role::Viewer);
        assert_eq!(actor.role(), Role::User);
    }

    #[test]
    fn serde_roundtrip() {
        let actor = Actor::new(Role::Manager).with_label("dana");
        let json = serde_json::to_string(&actor).expect("serialize");
        let parsed: Actor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, actor);
    }
}
