//! Unified access error type.
//!
//! [`AccessDenied`] separates the two ways an access question can fail:
//!
//! ```text
//! "is the actor allowed?"       ──► NotPrivileged   (legitimate denial)
//! "is the system configured?"   ──► UnknownRole     (misconfiguration)
//! ```
//!
//! A plain `false` from the evaluator is the normal denial path; these
//! variants exist for operations that must surface *why*.

use permatrix_types::{ErrorCode, ParseRoleError, Role};
use thiserror::Error;

/// Error for denied operations and role misconfiguration.
///
/// # Example
///
/// ```
/// use permatrix_auth::{AccessDenied, Role};
///
/// let err = AccessDenied::NotPrivileged {
///     role: Role::Manager,
///     operation: "toggle permission".to_string(),
/// };
///
/// assert!(err.to_string().contains("manager"));
/// assert!(!err.is_misconfiguration());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// The actor's role is not privileged enough for the operation.
    #[error("access denied: '{operation}' requires the admin role, actor is {role}")]
    NotPrivileged {
        /// Role of the rejected actor.
        role: Role,
        /// The operation that was attempted.
        operation: String,
    },

    /// A role name outside the closed set reached the resolver.
    #[error(transparent)]
    UnknownRole(#[from] ParseRoleError),
}

impl AccessDenied {
    /// Creates a [`NotPrivileged`](Self::NotPrivileged) error.
    pub fn not_privileged(role: Role, operation: impl Into<String>) -> Self {
        Self::NotPrivileged {
            role,
            operation: operation.into(),
        }
    }

    /// Returns `true` when the error signals a broken configuration
    /// rather than a legitimately denied actor.
    #[must_use]
    pub fn is_misconfiguration(&self) -> bool {
        matches!(self, Self::UnknownRole(_))
    }
}

impl ErrorCode for AccessDenied {
    fn code(&self) -> &'static str {
        match self {
            Self::NotPrivileged { .. } => "AUTH_NOT_PRIVILEGED",
            Self::UnknownRole(_) => "AUTH_UNKNOWN_ROLE",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A role typo in config can be corrected; a denial cannot be retried away.
        matches!(self, Self::UnknownRole(_))
    }
}
