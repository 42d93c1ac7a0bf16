//! Configuration management with hierarchical layering.
//!
//! # Architecture
//!
//! Configuration is loaded from multiple sources with priority-based merging:
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌──────────────────────────────────────────────┐
//! │  1. CLI overrides (ConfigResolver)           │  Per invocation
//! ├──────────────────────────────────────────────┤
//! │  2. Environment Variables (PERMATRIX_*)      │  Runtime override
//! ├──────────────────────────────────────────────┤
//! │  3. Project Config (.permatrix/config.toml)  │  Project-specific
//! ├──────────────────────────────────────────────┤
//! │  4. Global Config (~/.permatrix/config.toml) │  User defaults
//! ├──────────────────────────────────────────────┤
//! │  5. Default Values (compile-time)            │  Fallback
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `PERMATRIX_DEBUG` | `debug` | bool |
//! | `PERMATRIX_ROLE` | `actor.role` | String |
//! | `PERMATRIX_SEED` | `seed.path` | PathBuf |
//! | `PERMATRIX_VERBOSE` | `ui.verbose` | bool |
//!
//! The role is kept as text here and resolved by
//! [`RoleResolver`](permatrix_auth::RoleResolver) at the point of use, so
//! a misspelled role surfaces as an unknown-role error rather than a
//! config parse failure.
//!
//! # Example Configuration
//!
//! ```toml
//! # <project>/.permatrix/config.toml
//! debug = false
//!
//! [actor]
//! role = "manager"
//!
//! [seed]
//! path = "matrix.toml"
//!
//! [ui]
//! verbose = true
//! ```

mod error;
mod loader;
mod resolver;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use resolver::ConfigResolver;
pub use types::{ActorConfig, MatrixConfig, SeedConfig, UiConfig};

/// Default global config directory.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".permatrix")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".permatrix";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";
