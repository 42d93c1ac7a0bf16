//! Seed format I/O and validation.
//!
//! A seed is the ordered list of [`PermissionRecord`]s a registry is
//! built from. Two encodings are supported:
//!
//! | Format | Shape |
//! |--------|-------|
//! | JSON | top-level array of record objects |
//! | TOML | `[[permission]]` tables |
//!
//! ```toml
//! [[permission]]
//! id = "crm-access"
//! module = "CRM"
//! kind = "Access"
//! name = "Access CRM Module"
//! admin = true
//! manager = true
//! user = true
//! viewer = true
//! ```
//!
//! Rendering preserves record order and every field, so that a
//! load → render → load cycle leaves evaluation unchanged.

use permatrix_auth::{PermissionId, PermissionRecord};
use permatrix_types::ErrorCode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading, writing, or validating a seed.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read or written.
    #[error("seed file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON seed is malformed.
    #[error("invalid JSON seed: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML seed is malformed.
    #[error("invalid TOML seed: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Records could not be rendered as TOML.
    #[error("failed to render TOML seed: {0}")]
    TomlRender(#[from] toml::ser::Error),

    /// File extension does not name a supported format.
    #[error("unsupported seed format for '{path}' (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// A record has an empty id.
    #[error("record #{index} has an empty id")]
    EmptyId { index: usize },

    /// A record has an empty name.
    #[error("record '{id}' has an empty name")]
    EmptyName { id: PermissionId },

    /// Two records share an id.
    #[error("duplicate permission id '{id}'")]
    DuplicateId { id: PermissionId },

    /// A record denies the admin column.
    #[error("record '{id}' denies the admin column; admin must be granted everywhere")]
    AdminDenied { id: PermissionId },
}

impl SeedError {
    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl ErrorCode for SeedError {
    fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "SEED_IO",
            Self::Json(_) => "SEED_JSON",
            Self::TomlParse(_) => "SEED_TOML_PARSE",
            Self::TomlRender(_) => "SEED_TOML_RENDER",
            Self::UnsupportedFormat { .. } => "SEED_UNSUPPORTED_FORMAT",
            Self::EmptyId { .. } => "SEED_EMPTY_ID",
            Self::EmptyName { .. } => "SEED_EMPTY_NAME",
            Self::DuplicateId { .. } => "SEED_DUPLICATE_ID",
            Self::AdminDenied { .. } => "SEED_ADMIN_DENIED",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::UnsupportedFormat { .. })
    }
}

/// Encoding of a seed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    /// JSON array of records.
    Json,
    /// TOML `[[permission]]` tables.
    Toml,
}

impl SeedFormat {
    /// Picks the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SeedError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Deserialize)]
struct SeedDocument {
    #[serde(default, rename = "permission")]
    permissions: Vec<PermissionRecord>,
}

#[derive(Serialize)]
struct SeedDocumentRef<'a> {
    #[serde(rename = "permission")]
    permissions: &'a [PermissionRecord],
}

/// Parses seed text. Does not validate; see [`validate`].
///
/// # Errors
///
/// Returns [`SeedError::Json`] or [`SeedError::TomlParse`] on malformed input.
pub fn parse(input: &str, format: SeedFormat) -> Result<Vec<PermissionRecord>, SeedError> {
    match format {
        SeedFormat::Json => Ok(serde_json::from_str(input)?),
        SeedFormat::Toml => {
            let doc: SeedDocument = toml::from_str(input)?;
            Ok(doc.permissions)
        }
    }
}

/// Renders records as seed text, preserving order.
///
/// # Errors
///
/// Returns a serialization error if rendering fails.
pub fn render(records: &[PermissionRecord], format: SeedFormat) -> Result<String, SeedError> {
    match format {
        SeedFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        SeedFormat::Toml => Ok(toml::to_string_pretty(&SeedDocumentRef {
            permissions: records,
        })?),
    }
}

/// Reads and parses a seed file; the format follows the extension.
///
/// # Errors
///
/// Returns [`SeedError`] if the file is unreadable, has an unknown
/// extension, or does not parse.
pub fn load(path: &Path) -> Result<Vec<PermissionRecord>, SeedError> {
    let format = SeedFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| SeedError::io(path, e))?;
    let records = parse(&content, format)?;
    tracing::debug!(path = %path.display(), records = records.len(), "Loaded seed file");
    Ok(records)
}

/// Renders records and writes them to `path`; the format follows the extension.
///
/// # Errors
///
/// Returns [`SeedError`] on unknown extension, render failure, or I/O failure.
pub fn save(path: &Path, records: &[PermissionRecord]) -> Result<(), SeedError> {
    let format = SeedFormat::from_path(path)?;
    let content = render(records, format)?;
    std::fs::write(path, content).map_err(|e| SeedError::io(path, e))?;
    tracing::debug!(path = %path.display(), records = records.len(), "Saved seed file");
    Ok(())
}

/// Checks the structural rules every seed must satisfy.
///
/// Duplicate *names* are allowed here (the first record wins at lookup
/// time); the registry reports them separately.
///
/// # Errors
///
/// Returns the first violation found, in record order.
pub fn validate(records: &[PermissionRecord]) -> Result<(), SeedError> {
    let mut ids = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.id.is_empty() {
            return Err(SeedError::EmptyId { index });
        }
        if record.name.is_empty() {
            return Err(SeedError::EmptyName {
                id: record.id.clone(),
            });
        }
        if !record.admin {
            return Err(SeedError::AdminDenied {
                id: record.id.clone(),
            });
        }
        if !ids.insert(&record.id) {
            return Err(SeedError::DuplicateId {
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}
