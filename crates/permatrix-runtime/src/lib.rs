//! Permatrix Runtime - matrix ownership, evaluation, and editing.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Model Layer                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  permatrix-types : Role, ColumnKey, PermissionId, ErrorCode │
//! │  permatrix-auth  : PermissionRecord, RoleResolver, Actor,   │
//! │                    AccessPolicy, AccessState                │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Runtime Layer (THIS CRATE)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  registry   : PermissionRegistry (owned, Arc-shared)        │
//! │  evaluator  : AccessEvaluator (check_permission)            │
//! │  navigation : RouteTable, NavigationGate, Landing           │
//! │  editor     : MatrixEditor (single-cell flips)              │
//! │  redaction  : FieldGuard, Redacted                          │
//! │  seed       : JSON / TOML seed I/O                          │
//! │  config     : layered MatrixConfig                          │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Frontend Layer                             │
//! │  (permatrix-cli)                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! The registry is seeded once. Evaluators read it on every query,
//! the navigation gate asks an evaluator once per candidate route on
//! every render, and the editor flips one cell at a time. There is no
//! cache anywhere in between, so the query after an edit sees the edit.
//!
//! # Example
//!
//! ```
//! use permatrix_auth::{Actor, PermissionId, Role};
//! use permatrix_runtime::{
//!     AccessEvaluator, Landing, MatrixEditor, NavigationGate, PermissionRegistry, Route,
//!     RouteTable,
//! };
//! use std::sync::Arc;
//!
//! let registry = Arc::new(PermissionRegistry::builtin().expect("builtin"));
//! let routes = RouteTable::builtin();
//!
//! let manager = AccessEvaluator::for_role(Arc::clone(&registry), Role::Manager);
//! assert_eq!(
//!     NavigationGate::new(&routes, &manager).default_route(),
//!     Landing::Route(Route::Dashboard)
//! );
//!
//! MatrixEditor::new(Arc::clone(&registry))
//!     .toggle_permission(&Actor::new(Role::Admin), &PermissionId::new("dash-access"), Role::Manager)
//!     .expect("admin edit");
//!
//! assert_eq!(
//!     NavigationGate::new(&routes, &manager).default_route(),
//!     Landing::Route(Route::Crm)
//! );
//! ```

pub mod builtin;
pub mod config;
pub mod editor;
pub mod evaluator;
pub mod navigation;
pub mod redaction;
pub mod registry;
pub mod seed;

pub use config::{ConfigError, ConfigLoader, ConfigResolver, MatrixConfig};
pub use editor::{EditError, MatrixEditor, ToggleOutcome};
pub use evaluator::AccessEvaluator;
pub use navigation::{
    Landing, NavigationGate, ParseRouteError, Route, RouteEntry, RouteIssue, RouteTable,
};
pub use redaction::{FieldAccess, FieldGuard, Redacted, MASK};
pub use registry::PermissionRegistry;
pub use seed::{SeedError, SeedFormat};
