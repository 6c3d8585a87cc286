//! Error types for Brigade
//!
//! Runtime lookups and checker failures are kept in separate enums so that a
//! caller of a public surface never has to match on manifest or I/O errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type alias for manifest and checker operations
pub type BrigadeResult<T> = Result<T, BrigadeError>;

/// Errors raised by the module registry and override scopes.
///
/// These are lookup and declaration failures only. Errors produced by a bound
/// implementation travel inside the operation's own response type and are
/// never converted into one of these variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A module with this name is already registered
    #[error("module '{module}' is already registered")]
    DuplicateModule { module: String },

    /// No module with this name was ever registered
    #[error("unknown module '{module}'")]
    UnknownModule { module: String },

    /// The module exists but does not declare this operation
    #[error("module '{module}' has no operation '{operation}' on its public surface")]
    UnknownOperation { module: String, operation: String },

    /// The caller asked for a different request/response pair than was declared
    #[error(
        "operation '{module}.{operation}' is declared as {declared}, but was used as {requested}"
    )]
    ContractMismatch {
        module: String,
        operation: String,
        declared: String,
        requested: String,
    },

    /// A module or operation name failed validation
    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: &'static str,
    },

    /// Registration attempted after initialization finished
    #[error("cannot register module '{module}': registry is sealed")]
    RegistrySealed { module: String },
}

impl RegistryError {
    /// True for the two "nothing answers to that name" errors.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            RegistryError::UnknownModule { .. } | RegistryError::UnknownOperation { .. }
        )
    }
}

/// Errors raised while loading a manifest or running the boundary check
#[derive(Error, Debug)]
pub enum BrigadeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest could not be parsed
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// The same module name is declared twice in a manifest
    #[error("module '{module}' is declared more than once in {file}")]
    DuplicateModule { module: String, file: PathBuf },

    /// No manifest found walking up from the start directory
    #[error("no brigade.toml found in {start} or any parent directory")]
    ManifestNotFound { start: PathBuf },

    /// Source root does not exist
    #[error("source root not found: {path}")]
    SourceRootNotFound { path: PathBuf },

    /// Invalid exclude pattern
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Directory walk failed
    #[error("failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },
}
