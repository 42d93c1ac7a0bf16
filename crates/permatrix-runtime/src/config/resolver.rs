//! Configuration resolver trait for layered overrides.
//!
//! # Architecture
//!
//! ```text
//! ConfigLoader.load()  →  MatrixConfig (base)
//!                              │
//!                              ▼
//!                     ConfigResolver.apply()
//!                              │
//!                              ▼
//!                     MatrixConfig (final)
//! ```

use super::MatrixConfig;

/// Trait for applying configuration overrides.
///
/// Separates config loading (file/env) from per-invocation overrides
/// such as CLI flags.
pub trait ConfigResolver {
    /// Applies overrides to the given configuration.
    ///
    /// Only values the caller actually supplied should be applied;
    /// everything else keeps its loaded value.
    fn apply(&self, config: &mut MatrixConfig);
}
