//! Error types for migration runs.
//!
//! Per-script failures never surface here; they are recorded on the script
//! itself. These errors cover whole-run preconditions and report output.

use script_migrate_engine::EngineError;
use thiserror::Error;

/// Errors that can abort a migration run.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Repository analysis failed (missing or invalid root).
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Convenience alias for results with [`MigrateError`].
pub type Result<T> = std::result::Result<T, MigrateError>;
