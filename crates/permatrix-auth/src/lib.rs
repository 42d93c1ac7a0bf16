//! Permission primitives for permatrix.
//!
//! This crate provides the data model of the capability matrix and the
//! abstractions every consumer evaluates against.
//!
//! # Matrix Model
//!
//! ```text
//!                  admin  manager  user  viewer     ◄── ColumnKey
//! Access CRM Module  ✓       ✓      ✓      ✓
//! View Salary Data   ✓       ✓      ✗      ✗        ◄── PermissionRecord
//! Edit Compensation  ✓       ✗      ✗      ✗
//!
//! Actor(Role) ──RoleResolver──► ColumnKey ──► cell ──► AccessState
//! ```
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`PermissionRecord`] | One row: id, module, kind, name, four grants |
//! | [`RoleResolver`] | The only role → column mapping |
//! | [`Actor`] | Who is asking, and whether they are privileged |
//! | [`AccessPolicy`] | Query seam implemented by the runtime evaluator |
//! | [`AccessState`] | `GRANTED` / `DENIED` derived per query |
//! | [`AccessDenied`] | Denials and role misconfiguration |
//!
//! # Crate Architecture
//!
//! ```text
//! permatrix-types  (Role, ColumnKey, PermissionId, PermissionKind)
//!       ↑
//! permatrix-auth   ◄── THIS CRATE
//!       ↑
//! permatrix-runtime (PermissionRegistry, AccessEvaluator, NavigationGate, MatrixEditor)
//! ```
//!
//! # Design Principles
//!
//! - **Fail closed**: a name that is not in the matrix is denied
//! - **One mapping**: role → column happens only in [`RoleResolver`]
//! - **Admin is absolute**: the admin column is always granted

pub mod actor;
pub mod error;
pub mod policy;
pub mod record;
pub mod resolver;
pub mod state;

pub use actor::Actor;
pub use error::AccessDenied;
pub use policy::AccessPolicy;
pub use record::PermissionRecord;
pub use resolver::RoleResolver;
pub use state::AccessState;

// Re-export core types for convenience
pub use permatrix_types::{ColumnKey, PermissionId, PermissionKind, Role};
