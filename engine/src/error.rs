//! Error types for analysis, conversion and generation.

use std::path::PathBuf;

use script_migrate_core::ScriptType;
use thiserror::Error;

/// Errors that can occur in the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Repository path does not exist: {}", .0.display())]
    RepositoryNotFound(PathBuf),

    #[error("Repository path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The converter has no rule set for this script type.
    #[error("{0} scripts cannot be converted")]
    UnsupportedScriptType(ScriptType),

    #[error("unknown script archetype '{0}' (expected installer, build_tool or performance_tool)")]
    UnknownArchetype(String),
}

/// Convenience alias for results with [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;
