//! Derived access state.
//!
//! [`AccessState`] is what a render sees for a (route, role) or
//! (field, role) pair. It has exactly two values and is recomputed from
//! the matrix on every query; there is no pending or cached state.

use serde::{Deserialize, Serialize};

/// Result of evaluating one permission for one actor.
///
/// # Example
///
/// ```
/// use permatrix_auth::AccessState;
///
/// let state = AccessState::from(true);
/// assert!(state.is_granted());
/// assert_eq!(state.to_string(), "GRANTED");
///
/// assert_eq!(AccessState::from(false).as_str(), "DENIED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessState {
    /// The actor holds the permission.
    Granted,
    /// The actor does not hold the permission, or it does not exist.
    Denied,
}

impl AccessState {
    /// Returns `true` if granted.
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Returns `true` if denied.
    #[must_use]
    pub fn is_denied(self) -> bool {
        matches!(self, Self::Denied)
    }

    /// Returns the display spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "GRANTED",
            Self::Denied => "DENIED",
        }
    }
}

impl From<bool> for AccessState {
    fn from(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

impl std::fmt::Display for AccessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bool() {
        assert_eq!(AccessState::from(true), AccessState::Granted);
        assert_eq!(AccessState::from(false), AccessState::Denied);
    }

    #[test]
    fn predicates_are_exclusive() {
        for state in [AccessState::Granted, AccessState::Denied] {
            assert_ne!(state.is_granted(), state.is_denied());
        }
    }

    #[test]
    fn serde_uppercase() {
        let json = serde_json::to_string(&AccessState::Denied).expect("serialize");
        assert_eq!(json, "\"DENIED\"");
    }
}
