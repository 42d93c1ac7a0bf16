//! Unified error interface for permatrix.
//!
//! Every error enum in the workspace implements [`ErrorCode`] so that
//! frontends can branch on a stable, machine-readable code instead of
//! matching on display strings.
//!
//! # Example
//!
//! ```
//! use permatrix_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum SeedProblem {
//!     Missing(String),
//!     Locked,
//! }
//!
//! impl ErrorCode for SeedProblem {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Missing(_) => "SEED_MISSING",
//!             Self::Locked => "SEED_LOCKED",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Locked)
//!     }
//! }
//!
//! let err = SeedProblem::Locked;
//! assert_eq!(err.code(), "SEED_LOCKED");
//! assert!(err.is_recoverable());
//! ```

/// Unified error code interface for permatrix errors.
///
/// # Code Format
///
/// Error codes should be:
///
/// - **UPPER_SNAKE_CASE**: e.g., `"TIMEOUT"`, `"PERMISSION_DENIED"`
/// - **Namespace-prefixed**: `AUTH_`, `EDIT_`, `SEED_`, `CONFIG_`
/// - **Stable**: Codes should not change once defined (API contract)
///
/// # Recoverability
///
/// An error is recoverable when the caller can fix it without a code
/// change: pointing at a different seed file, correcting an env var.
/// Denials and invariant violations are not recoverable.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    ///
    /// # Format
    ///
    /// - UPPER_SNAKE_CASE
    /// - Prefixed with the owning layer (`"AUTH_"`, `"SEED_"`, ...)
    /// - Stable across versions (breaking change if modified)
    fn code(&self) -> &'static str;

    /// Returns whether the caller can correct the condition and retry.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows the workspace conventions.
///
/// # Checks
///
/// 1. Code is UPPER_SNAKE_CASE
/// 2. Code starts with expected prefix
/// 3. Code is not empty
///
/// # Panics
///
/// Panics with descriptive message if validation fails.
///
/// # Example
///
/// ```
/// use permatrix_types::{ErrorCode, assert_error_code};
///
/// #[derive(Debug)]
/// enum GateError { Closed }
///
/// impl ErrorCode for GateError {
///     fn code(&self) -> &'static str { "GATE_CLOSED" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&GateError::Closed, "GATE_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");

    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );

    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates multiple error codes at once.
///
/// Use this in tests to cover every variant of an error enum.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    if s.starts_with('_') || s.ends_with('_') {
        return false;
    }

    if s.contains("__") {
        return false;
    }

    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum MatrixError {
        SeedUnreadable,
        AdminLocked,
        Lowercase,
    }

    impl ErrorCode for MatrixError {
        fn code(&self) -> &'static str {
            match self {
                Self::SeedUnreadable => "MATRIX_SEED_UNREADABLE",
                Self::AdminLocked => "MATRIX_ADMIN_LOCKED",
                Self::Lowercase => "MATRIX_lower",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::SeedUnreadable)
        }
    }

    #[test]
    fn recoverability_is_per_variant() {
        assert!(MatrixError::SeedUnreadable.is_recoverable());
        assert!(!MatrixError::AdminLocked.is_recoverable());
    }

    #[test]
    fn well_formed_codes_pass() {
        assert_error_codes(
            &[MatrixError::SeedUnreadable, MatrixError::AdminLocked],
            "MATRIX_",
        );
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn wrong_prefix_panics() {
        assert_error_code(&MatrixError::AdminLocked, "SEED_");
    }

    #[test]
    #[should_panic(expected = "UPPER_SNAKE_CASE")]
    fn lowercase_code_panics() {
        assert_error_code(&MatrixError::Lowercase, "MATRIX_");
    }

    #[test]
    fn is_upper_snake_case_valid() {
        assert!(is_upper_snake_case("AUTH"));
        assert!(is_upper_snake_case("AUTH_UNKNOWN_ROLE"));
        assert!(is_upper_snake_case("SEED_V2"));
    }

    #[test]
    fn is_upper_snake_case_invalid() {
        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("auth"));
        assert!(!is_upper_snake_case("Auth_Denied"));
        assert!(!is_upper_snake_case("_AUTH"));
        assert!(!is_upper_snake_case("AUTH_"));
        assert!(!is_upper_snake_case("AUTH__DENIED"));
    }
}
