//! Access policy trait.
//!
//! Defines [`AccessPolicy`], the query seam every consumer evaluates
//! against. It lives here so that navigation gating and field redaction
//! can be written and tested without a concrete registry.
//!
//! # Architecture
//!
//! ```text
//! AccessPolicy trait (permatrix-auth)       <- abstract, no runtime deps
//!          │
//!          └── AccessEvaluator (permatrix-runtime) <- registry + actor
//!
//! Consumers: NavigationGate, FieldGuard, module code
//! ```

use crate::AccessState;

/// Answers "does the current actor hold the permission named `name`?".
///
/// Implementations must fail closed: a name they do not know is denied.
/// They must also be free of caching across matrix edits, so that a
/// change is visible to the next query.
///
/// # Example
///
/// ```
/// use permatrix_auth::AccessPolicy;
///
/// struct OnlyDashboard;
///
/// impl AccessPolicy for OnlyDashboard {
///     fn check_permission(&self, name: &str) -> bool {
///         name == "Access Dashboard"
///     }
/// }
///
/// let policy = OnlyDashboard;
/// assert!(policy.check_permission("Access Dashboard"));
/// assert!(policy.access_state("Access Finance Module").is_denied());
/// ```
pub trait AccessPolicy: Send + Sync {
    /// Returns `true` if the actor holds the named permission.
    fn check_permission(&self, name: &str) -> bool;

    /// Returns the two-valued access state for the named permission.
    fn access_state(&self, name: &str) -> AccessState {
        AccessState::from(self.check_permission(name))
    }

    /// Returns `true` only if every named permission is held.
    ///
    /// An empty list is vacuously granted.
    fn check_all(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.check_permission(name))
    }
}

impl<P: AccessPolicy + ?Sized> AccessPolicy for &P {
    fn check_permission(&self, name: &str) -> bool {
        (**self).check_permission(name)
    }
}
