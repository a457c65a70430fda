//! Data model shared by the analyzer, converter and migration framework.
//!
//! Every type here serializes with [`serde`] so analysis results, plans and
//! run configurations can be written as JSON or YAML without extra mapping.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Source language of a legacy script.
///
/// The variant order is the order used for every per-type listing
/// (plans, reports, CLI output).
///
/// # Examples
///
/// ```
/// use script_migrate_core::ScriptType;
///
/// assert_eq!("perl".parse::<ScriptType>().unwrap(), ScriptType::Perl);
/// assert_eq!(ScriptType::Shell.to_string(), "shell");
/// assert!(ScriptType::Shell.glob_patterns().contains(&"*.bash"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptType {
    Shell,
    Perl,
    Python,
}

impl ScriptType {
    /// All script types, in listing order.
    pub const ALL: [ScriptType; 3] = [ScriptType::Shell, ScriptType::Perl, ScriptType::Python];

    /// Lowercase label used in serialized output and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Perl => "perl",
            Self::Python => "python",
        }
    }

    /// File-name glob patterns that identify this script type.
    pub fn glob_patterns(self) -> &'static [&'static str] {
        match self {
            Self::Shell => &["*.sh", "*.bash"],
            Self::Perl => &["*.pl", "*.pm"],
            Self::Python => &["*.py"],
        }
    }

    /// Detects the script type from a file extension (`sh`, `pl`, `py`, ...).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "sh" | "bash" => Some(Self::Shell),
            "pl" | "pm" => Some(Self::Perl),
            "py" => Some(Self::Python),
            _ => None,
        }
    }

    /// Detects the script type of a path from its extension.
    pub fn detect(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScriptType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shell" | "sh" | "bash" => Ok(Self::Shell),
            "perl" | "pl" => Ok(Self::Perl),
            "python" | "py" => Ok(Self::Python),
            other => Err(ConfigError::UnknownScriptType(other.to_string())),
        }
    }
}

/// Lifecycle of a script inside one migration run.
///
/// Only [`Pending`](MigrationStatus::Pending) scripts are migrated. A script
/// moves `Pending → InProgress → Completed | Failed` and never leaves a
/// terminal state.
///
/// # Examples
///
/// ```
/// use script_migrate_core::MigrationStatus;
///
/// let failed = MigrationStatus::Failed("permission denied".into());
/// assert_eq!(failed.label(), "failed");
/// assert!(failed.is_terminal());
/// assert!(MigrationStatus::default().is_pending());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum MigrationStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    /// Migration failed; carries the error text.
    Failed(String),
}

impl MigrationStatus {
    /// Every status label, in lifecycle order.
    pub const LABELS: [&'static str; 4] = ["pending", "in_progress", "completed", "failed"];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed(_))
    }
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata for one discovered script.
///
/// Produced by repository analysis, then mutated in place by the migration
/// run (`migration_status`, `migration_notes`) and finally read by reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptInfo {
    /// File name including extension.
    pub name: String,
    /// Path as discovered under the repository root.
    pub path: PathBuf,
    pub script_type: ScriptType,
    /// File size in bytes.
    pub size: u64,
    /// Number of newline-separated segments in the file.
    pub lines: usize,
    /// Imported modules or invoked external commands.
    pub dependencies: BTreeSet<String>,
    /// Function or subroutine names, in file order.
    pub functions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub migration_status: MigrationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_notes: Option<String>,
}

impl ScriptInfo {
    /// Creates a pending script with no extracted metadata.
    pub fn new(path: impl Into<PathBuf>, script_type: ScriptType) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path,
            script_type,
            size: 0,
            lines: 0,
            dependencies: BTreeSet::new(),
            functions: Vec::new(),
            description: None,
            migration_status: MigrationStatus::Pending,
            migration_notes: None,
        }
    }

    /// File name without its extension.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Style of generated Python code.
///
/// Carried through configuration, plans and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Modern,
    Compatible,
    Minimal,
}

impl OutputFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Compatible => "compatible",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(Self::Modern),
            "compatible" => Ok(Self::Compatible),
            "minimal" => Ok(Self::Minimal),
            other => Err(ConfigError::UnknownOutputFormat(other.to_string())),
        }
    }
}

/// Outcome recorded for one migration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LogOutcome {
    Completed { target_path: PathBuf },
    Failed { error: String },
}

/// Append-only record of one migration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationLogEntry {
    /// RFC 3339 timestamp of the attempt.
    pub timestamp: String,
    /// Script file name.
    pub script: String,
    #[serde(flatten)]
    pub outcome: LogOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_type_serde_matches_display() {
        for script_type in ScriptType::ALL {
            let json = serde_json::to_string(&script_type).unwrap();
            assert_eq!(json, format!("\"{script_type}\""));
        }
    }

    #[test]
    fn test_script_type_from_extension() {
        assert_eq!(ScriptType::from_extension("sh"), Some(ScriptType::Shell));
        assert_eq!(ScriptType::from_extension("BASH"), Some(ScriptType::Shell));
        assert_eq!(ScriptType::from_extension("pm"), Some(ScriptType::Perl));
        assert_eq!(ScriptType::from_extension("py"), Some(ScriptType::Python));
        assert_eq!(ScriptType::from_extension("rb"), None);
        assert_eq!(
            ScriptType::detect(Path::new("util/mkdef.pl")),
            Some(ScriptType::Perl)
        );
        assert_eq!(ScriptType::detect(Path::new("Makefile")), None);
    }

    #[test]
    fn test_script_type_parse_rejects_unknown() {
        let err = "ruby".parse::<ScriptType>().unwrap_err();
        assert!(err.to_string().contains("ruby"));
    }

    #[test]
    fn test_status_labels_match_serde_tags() {
        let statuses = [
            MigrationStatus::Pending,
            MigrationStatus::InProgress,
            MigrationStatus::Completed,
            MigrationStatus::Failed("boom".into()),
        ];
        for (status, label) in statuses.iter().zip(MigrationStatus::LABELS) {
            assert_eq!(status.label(), label);
            let value = serde_json::to_value(status).unwrap();
            assert_eq!(value["state"], label);
        }
    }

    #[test]
    fn test_failed_status_keeps_reason() {
        let value = serde_json::to_value(MigrationStatus::Failed("disk full".into())).unwrap();
        assert_eq!(value["reason"], "disk full");
        assert!(!MigrationStatus::InProgress.is_terminal());
        assert!(!MigrationStatus::Completed.is_pending());
    }

    #[test]
    fn test_script_info_new_derives_name_and_stem() {
        let info = ScriptInfo::new("tools/install.sh", ScriptType::Shell);
        assert_eq!(info.name, "install.sh");
        assert_eq!(info.stem(), "install");
        assert!(info.migration_status.is_pending());
        assert!(info.description.is_none());
    }

    #[test]
    fn test_log_entry_flattens_outcome() {
        let entry = MigrationLogEntry {
            timestamp: "2024-01-01T00:00:00+00:00".into(),
            script: "install.sh".into(),
            outcome: LogOutcome::Failed {
                error: "denied".into(),
            },
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["error"], "denied");
        assert_eq!(value["script"], "install.sh");
    }

    #[test]
    fn test_output_format_round_trips_labels() {
        for format in [
            OutputFormat::Modern,
            OutputFormat::Compatible,
            OutputFormat::Minimal,
        ] {
            assert_eq!(format.label().parse::<OutputFormat>().unwrap(), format);
        }
        assert!("fancy".parse::<OutputFormat>().is_err());
    }
}
