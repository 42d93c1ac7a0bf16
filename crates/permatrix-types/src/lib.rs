//! Core types for permatrix.
//!
//! This crate provides the foundational vocabulary shared by every
//! layer of the permission matrix: roles, matrix columns, permission
//! identifiers and kinds, and the unified [`ErrorCode`] interface.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Model Layer                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  permatrix-types   : Role, ColumnKey, PermissionId  ◄── HERE │
//! │  permatrix-auth    : PermissionRecord, RoleResolver, Actor   │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Runtime Layer                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  permatrix-runtime : Registry, Evaluator, Gate, Editor       │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Frontend Layer                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  permatrix-cli     : operator command-line interface         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Roles vs Columns
//!
//! [`Role`] classifies an actor. [`ColumnKey`] names a column of the
//! matrix. They have the same four members today, but only
//! `permatrix_auth::RoleResolver` is allowed to map one to the other.
//!
//! # Example
//!
//! ```
//! use permatrix_types::{PermissionId, PermissionKind, Role};
//!
//! let role: Role = "manager".parse().expect("known role");
//! assert_eq!(role, Role::Manager);
//! assert!("root".parse::<Role>().is_err());
//!
//! let id = PermissionId::new("fin-access");
//! assert_eq!(id.as_str(), "fin-access");
//!
//! assert_eq!(PermissionKind::Access.as_str(), "Access");
//! ```

mod error;
mod id;
mod kind;
mod role;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::PermissionId;
pub use kind::PermissionKind;
pub use role::{ColumnKey, ParseRoleError, Role};
