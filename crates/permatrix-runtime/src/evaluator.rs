//! Access evaluation.
//!
//! [`AccessEvaluator`] is the query surface every module calls. It
//! binds a shared [`PermissionRegistry`] to the current [`Actor`] and
//! answers `check_permission(name)` by reading the registry on every
//! call. Nothing is memoized, so a matrix edit is visible to the very
//! next query.

use crate::PermissionRegistry;
use permatrix_auth::{AccessDenied, AccessPolicy, AccessState, Actor, Role};
use std::sync::Arc;

/// Evaluates permissions for one actor against a shared registry.
///
/// # Rules
///
/// | Lookup | Result |
/// |--------|--------|
/// | first record named `name` found | that record's grant in the actor's column |
/// | no record named `name` | `false` (fail closed) |
///
/// # Example
///
/// ```
/// use permatrix_auth::Role;
/// use permatrix_runtime::{AccessEvaluator, PermissionRegistry};
/// use std::sync::Arc;
///
/// let registry = Arc::new(PermissionRegistry::builtin().expect("builtin"));
/// let viewer = AccessEvaluator::for_role(Arc::clone(&registry), Role::Viewer);
///
/// assert!(!viewer.check_permission("Access Dashboard"));
/// assert!(viewer.check_permission("Access CRM Module"));
/// assert!(!viewer.check_permission("Nonexistent Permission Name"));
///
/// let manager = viewer.with_role(Role::Manager);
/// assert!(manager.check_permission("Access Dashboard"));
/// ```
#[derive(Debug, Clone)]
pub struct AccessEvaluator {
    registry: Arc<PermissionRegistry>,
    actor: Actor,
}

impl AccessEvaluator {
    /// Creates an evaluator for `actor`.
    #[must_use]
    pub fn new(registry: Arc<PermissionRegistry>, actor: Actor) -> Self {
        Self { registry, actor }
    }

    /// Creates an evaluator for an anonymous actor with `role`.
    #[must_use]
    pub fn for_role(registry: Arc<PermissionRegistry>, role: Role) -> Self {
        Self::new(registry, Actor::new(role))
    }

    /// Creates an evaluator from a role name.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied::UnknownRole`] if `role` does not name one
    /// of the four roles. Unknown roles are reported, never silently
    /// evaluated as "deny everything".
    pub fn for_raw_role(registry: Arc<PermissionRegistry>, role: &str) -> Result<Self, AccessDenied> {
        let role = role.parse::<Role>().inspect_err(|e| {
            tracing::error!(error = %e, "role resolution failed");
        })?;
        Ok(Self::for_role(registry, role))
    }

    /// Returns the actor this evaluator answers for.
    #[must_use]
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Returns the shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<PermissionRegistry> {
        &self.registry
    }

    /// Returns an evaluator for another role over the same registry.
    #[must_use]
    pub fn with_role(&self, role: Role) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            actor: self.actor.with_role(role),
        }
    }

    /// Returns `true` if the actor holds the permission named `name`.
    ///
    /// Unknown names are denied.
    #[must_use]
    pub fn check_permission(&self, name: &str) -> bool {
        let column = self.actor.column();
        match self.registry.grant(name, column) {
            Some(granted) => {
                tracing::trace!(
                    actor = %self.actor,
                    permission = name,
                    granted,
                    "permission evaluated"
                );
                granted
            }
            None => {
                tracing::debug!(
                    actor = %self.actor,
                    permission = name,
                    "permission not in matrix; denying"
                );
                false
            }
        }
    }

    /// Returns the names of every permission the actor holds, in seed order.
    ///
    /// Shadowed duplicates are skipped so the list agrees with
    /// [`check_permission`](Self::check_permission).
    #[must_use]
    pub fn granted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in self.registry.snapshot() {
            if !names.contains(&record.name) && self.check_permission(&record.name) {
                names.push(record.name);
            }
        }
        names
    }
}

impl AccessPolicy for AccessEvaluator {
    fn check_permission(&self, name: &str) -> bool {
        AccessEvaluator::check_permission(self, name)
    }

    fn access_state(&self, name: &str) -> AccessState {
        AccessState::from(AccessEvaluator::check_permission(self, name))
    }
}
