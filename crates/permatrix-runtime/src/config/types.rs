//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers. Every
/// field is optional in a config file.
///
/// # Example
///
/// ```
/// use permatrix_runtime::config::MatrixConfig;
///
/// let config = MatrixConfig::default();
/// assert!(!config.debug);
/// assert!(config.actor.role.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatrixConfig {
    /// Enable debug logging.
    pub debug: bool,

    /// Who is evaluating the matrix.
    pub actor: ActorConfig,

    /// Where the matrix comes from.
    pub seed: SeedConfig,

    /// Output settings.
    pub ui: UiConfig,
}

impl MatrixConfig {
    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Merges another config into this one.
    ///
    /// Values from `other` override values in `self` only if they
    /// differ from the default.
    pub fn merge(&mut self, other: &Self) {
        if other.debug {
            self.debug = true;
        }
        self.actor.merge(&other.actor);
        self.seed.merge(&other.seed);
        self.ui.merge(&other.ui);
    }
}

/// Actor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ActorConfig {
    /// Role name (`admin`, `manager`, `user`, `viewer`).
    ///
    /// There is no default role.
    pub role: Option<String>,
}

impl ActorConfig {
    fn merge(&mut self, other: &Self) {
        if other.role.is_some() {
            self.role.clone_from(&other.role);
        }
    }
}

/// Seed configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedConfig {
    /// Seed file (`.json` or `.toml`). `None` uses the builtin matrix.
    pub path: Option<PathBuf>,
}

impl SeedConfig {
    fn merge(&mut self, other: &Self) {
        if other.path.is_some() {
            self.path.clone_from(&other.path);
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Verbose output.
    pub verbose: bool,
}

impl UiConfig {
    fn merge(&mut self, other: &Self) {
        if other.verbose {
            self.verbose = true;
        }
    }
}
