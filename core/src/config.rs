//! Run configuration for a repository migration.
//!
//! A [`MigrationConfig`] is built from command-line flags or loaded from a
//! YAML file. Missing fields fall back to [`MigrationConfig::default`].
//!
//! # Example YAML
//!
//! ```yaml
//! source_repo: ./openssl-tools
//! target_dir: ./migrated
//! script_types:
//!   - shell
//!   - perl
//! preserve_structure: true
//! use_click: true
//! output_format: modern
//! ```

use std::collections::BTreeSet;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{OutputFormat, ScriptType};

/// Directory name used for migrated output when none is configured.
pub const DEFAULT_TARGET_DIR: &str = "migrated";

/// Settings for one migration run. Read-only once the run starts.
///
/// # Examples
///
/// ```
/// use script_migrate_core::{MigrationConfig, ScriptType};
///
/// let config = MigrationConfig::new("legacy", "out");
/// assert!(config.includes(ScriptType::Shell));
/// assert!(!config.includes(ScriptType::Python));
/// assert!(config.use_click);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Repository containing the legacy scripts.
    pub source_repo: PathBuf,
    /// Directory receiving generated Python files and the report.
    pub target_dir: PathBuf,
    /// Script types to discover.
    pub script_types: BTreeSet<ScriptType>,
    /// Mirror the script's parent directory under the target.
    pub preserve_structure: bool,
    pub add_tests: bool,
    pub add_documentation: bool,
    /// Emit a click-based `main` instead of a plain one.
    pub use_click: bool,
    pub use_pathlib: bool,
    pub use_subprocess: bool,
    pub output_format: OutputFormat,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            source_repo: PathBuf::from("."),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            script_types: BTreeSet::from([ScriptType::Shell, ScriptType::Perl]),
            preserve_structure: true,
            add_tests: true,
            add_documentation: true,
            use_click: true,
            use_pathlib: true,
            use_subprocess: true,
            output_format: OutputFormat::Modern,
        }
    }
}

impl MigrationConfig {
    /// Creates a configuration with default options for the given paths.
    pub fn new(source_repo: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_repo: source_repo.into(),
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }

    /// Replaces the set of script types to discover.
    pub fn with_script_types(mut self, types: impl IntoIterator<Item = ScriptType>) -> Self {
        self.script_types = types.into_iter().collect();
        self
    }

    /// Returns `true` if scripts of `script_type` are part of this run.
    pub fn includes(&self, script_type: ScriptType) -> bool {
        self.script_types.contains(&script_type)
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::ConfigError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}
