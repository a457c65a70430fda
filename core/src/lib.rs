//! Shared data model for migrating legacy shell and Perl scripts to Python.
//!
//! This crate defines the types passed between the migration stages:
//!
//! - [`ScriptType`]: source language of a script (`shell`, `perl`,
//!   `python`) with its discovery glob patterns.
//! - [`ScriptInfo`]: metadata extracted from one discovered script, plus its
//!   [`MigrationStatus`] within a run.
//! - [`MigrationConfig`]: run settings, loadable from YAML.
//! - [`MigrationLogEntry`]: append-only record of one migration attempt.
//!
//! # Example
//!
//! ```
//! use script_migrate_core::*;
//!
//! let mut info = ScriptInfo::new("util/install.sh", ScriptType::Shell);
//! info.functions.push("check_deps".into());
//! assert_eq!(info.name, "install.sh");
//! assert_eq!(info.migration_status, MigrationStatus::Pending);
//!
//! let config = MigrationConfig::new("util", "migrated");
//! assert!(config.includes(info.script_type));
//! ```

mod config;
mod error;
mod types;

pub use config::{DEFAULT_TARGET_DIR, MigrationConfig};
pub use error::{ConfigError, Result};
pub use types::*;
