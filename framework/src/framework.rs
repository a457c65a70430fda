//! Stateful orchestration of a repository migration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use script_migrate_core::{LogOutcome, MigrationConfig, MigrationLogEntry, MigrationStatus, ScriptInfo};
use script_migrate_engine::analyzer;
use tracing::{error, info, warn};

use crate::codegen::render_migrated_script;
use crate::error::Result;
use crate::plan::{MigrationPlan, generate_plan};
use crate::report::{MigrationSummary, migration_report_markdown};

/// File name of the report written by [`MigrationFramework::save_report`].
pub const REPORT_FILE_NAME: &str = "migration_report.md";

/// Holds the run configuration, the analyzed scripts and the append-only
/// migration log.
#[derive(Debug)]
pub struct MigrationFramework {
    config: MigrationConfig,
    scripts: Vec<ScriptInfo>,
    migration_log: Vec<MigrationLogEntry>,
}

impl MigrationFramework {
    /// Creates a framework for `config`, creating the target directory.
    pub fn new(config: MigrationConfig) -> Result<Self> {
        fs::create_dir_all(&config.target_dir)?;
        info!(
            source = %config.source_repo.display(),
            target = %config.target_dir.display(),
            "Initialized migration framework"
        );
        Ok(Self {
            config,
            scripts: Vec::new(),
            migration_log: Vec::new(),
        })
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    pub fn scripts(&self) -> &[ScriptInfo] {
        &self.scripts
    }

    pub fn migration_log(&self) -> &[MigrationLogEntry] {
        &self.migration_log
    }

    /// Analyzes `repo_path` and replaces the stored scripts with the result.
    pub fn analyze_repository(&mut self, repo_path: &Path) -> Result<&[ScriptInfo]> {
        self.scripts = analyzer::analyze_repository(repo_path, &self.config.script_types)?;
        Ok(&self.scripts)
    }

    /// Plan over the stored scripts, without per-script detail.
    pub fn generate_migration_plan(&self) -> MigrationPlan {
        generate_plan(&self.scripts, false)
    }

    /// Plan over the stored scripts, including per-script detail.
    pub fn generate_detailed_plan(&self) -> MigrationPlan {
        generate_plan(&self.scripts, true)
    }

    /// Where the Python version of `script` is written.
    pub fn target_path(&self, script: &ScriptInfo) -> PathBuf {
        let file_name = format!("{}.py", script.stem());
        let parent = script
            .path
            .parent()
            .and_then(Path::file_name)
            .filter(|_| self.config.preserve_structure);
        match parent {
            Some(dir) => self.config.target_dir.join(dir).join(file_name),
            None => self.config.target_dir.join(file_name),
        }
    }

    /// Migrates the script at `index`, recording the outcome on the script
    /// and in the log. Returns whether the migration succeeded.
    ///
    /// Scripts that already completed or failed are left untouched and
    /// nothing is logged for them.
    pub fn migrate_script(&mut self, index: usize) -> bool {
        let Some(script) = self.scripts.get(index) else {
            warn!(index, "No script at index");
            return false;
        };
        match script.migration_status {
            MigrationStatus::Pending | MigrationStatus::InProgress => {}
            MigrationStatus::Completed | MigrationStatus::Failed(_) => {
                warn!(script = %script.name, status = %script.migration_status, "Script already migrated");
                return false;
            }
        }
        let name = script.name.clone();
        let target = self.target_path(script);
        info!(script = %name, "Migrating script");

        let code = render_migrated_script(script, self.config.use_click);
        let outcome = write_script(&target, &code);

        let script = &mut self.scripts[index];
        let (status, notes, log_outcome, succeeded) = match outcome {
            Ok(()) => {
                info!(script = %name, target = %target.display(), "Successfully migrated");
                (
                    MigrationStatus::Completed,
                    format!("Migrated to {}", target.display()),
                    LogOutcome::Completed {
                        target_path: target,
                    },
                    true,
                )
            }
            Err(err) => {
                error!(script = %name, "Failed to migrate: {err}");
                let reason = err.to_string();
                (
                    MigrationStatus::Failed(reason.clone()),
                    reason.clone(),
                    LogOutcome::Failed { error: reason },
                    false,
                )
            }
        };
        script.migration_status = status;
        script.migration_notes = Some(notes);

        self.migration_log.push(MigrationLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            script: name,
            outcome: log_outcome,
        });
        succeeded
    }

    /// Migrates every pending script. Scripts in any other state are skipped.
    pub fn migrate_all(&mut self) -> MigrationSummary {
        let mut summary = MigrationSummary {
            total: self.scripts.len(),
            ..MigrationSummary::default()
        };
        info!("Starting migration of {} scripts", summary.total);

        for index in 0..self.scripts.len() {
            match self.scripts[index].migration_status {
                MigrationStatus::Pending => {
                    self.scripts[index].migration_status = MigrationStatus::InProgress;
                    if self.migrate_script(index) {
                        summary.completed += 1;
                    } else {
                        summary.failed += 1;
                    }
                }
                MigrationStatus::InProgress
                | MigrationStatus::Completed
                | MigrationStatus::Failed(_) => summary.skipped += 1,
            }
        }

        info!(
            "Migration completed: {} successful, {} failed",
            summary.completed, summary.failed
        );
        summary
    }

    /// Markdown report of the current state.
    pub fn generate_report(&self) -> String {
        migration_report_markdown(
            &self.config,
            &self.scripts,
            &self.migration_log,
            &Utc::now().to_rfc3339(),
        )
    }

    /// Writes the report to `output_path`, or to
    /// `<target>/migration_report.md` when none is given.
    pub fn save_report(&self, output_path: Option<&Path>) -> Result<PathBuf> {
        let path = output_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.target_dir.join(REPORT_FILE_NAME));
        fs::write(&path, self.generate_report())?;
        info!("Migration report saved to: {}", path.display());
        Ok(path)
    }
}

fn write_script(target: &Path, code: &str) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use script_migrate_core::ScriptType;
    use tempfile::TempDir;

    fn framework(dir: &TempDir, preserve_structure: bool) -> MigrationFramework {
        let mut config = MigrationConfig::new(dir.path(), dir.path().join("out"));
        config.preserve_structure = preserve_structure;
        MigrationFramework::new(config).unwrap()
    }

    #[test]
    fn test_new_creates_target_dir() {
        let dir = TempDir::new().unwrap();
        let fw = framework(&dir, true);
        assert!(fw.config().target_dir.is_dir());
        assert!(fw.scripts().is_empty());
    }

    #[test]
    fn test_target_path_preserves_parent_dir() {
        let dir = TempDir::new().unwrap();
        let script = ScriptInfo::new("repo/util/mkinstall.sh", ScriptType::Shell);

        let nested = framework(&dir, true);
        assert_eq!(
            nested.target_path(&script),
            dir.path().join("out").join("util").join("mkinstall.py")
        );

        let flat = framework(&dir, false);
        assert_eq!(
            flat.target_path(&script),
            dir.path().join("out").join("mkinstall.py")
        );
    }

    #[test]
    fn test_target_path_without_parent_is_flat() {
        let dir = TempDir::new().unwrap();
        let fw = framework(&dir, true);
        let script = ScriptInfo::new("build.sh", ScriptType::Shell);
        assert_eq!(fw.target_path(&script), dir.path().join("out").join("build.py"));
    }

    #[test]
    fn test_analyze_missing_repository_fails() {
        let dir = TempDir::new().unwrap();
        let mut fw = framework(&dir, true);
        assert!(fw.analyze_repository(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_migrate_script_out_of_range() {
        let dir = TempDir::new().unwrap();
        let mut fw = framework(&dir, true);
        assert!(!fw.migrate_script(3));
        assert!(fw.migration_log().is_empty());
    }

    #[test]
    fn test_migrate_all_skips_non_pending() {
        let dir = TempDir::new().unwrap();
        let mut fw = framework(&dir, false);
        let mut done = ScriptInfo::new(dir.path().join("a.sh"), ScriptType::Shell);
        done.migration_status = MigrationStatus::Completed;
        fw.scripts = vec![done, ScriptInfo::new(dir.path().join("b.sh"), ScriptType::Shell)];

        let summary = fw.migrate_all();
        assert_eq!(
            summary,
            MigrationSummary {
                total: 2,
                completed: 1,
                failed: 0,
                skipped: 1,
            }
        );
        assert!(dir.path().join("out").join("b.py").is_file());
        assert!(!dir.path().join("out").join("a.py").exists());
        assert_eq!(fw.migration_log().len(), 1);
    }

    #[test]
    fn test_failed_write_records_reason() {
        let dir = TempDir::new().unwrap();
        let mut fw = framework(&dir, false);
        fs::create_dir_all(dir.path().join("out").join("blocked.py")).unwrap();
        fw.scripts = vec![ScriptInfo::new(dir.path().join("blocked.sh"), ScriptType::Shell)];

        let summary = fw.migrate_all();
        assert_eq!(summary.failed, 1);

        let script = &fw.scripts()[0];
        assert!(matches!(script.migration_status, MigrationStatus::Failed(_)));
        assert!(script.migration_notes.is_some());
        assert!(matches!(
            fw.migration_log()[0].outcome,
            LogOutcome::Failed { .. }
        ));
    }

    #[test]
    fn test_migrate_script_leaves_failed_script_alone() {
        let dir = TempDir::new().unwrap();
        let mut fw = framework(&dir, false);
        let blocker = dir.path().join("out").join("blocked.py");
        fs::create_dir_all(&blocker).unwrap();
        fw.scripts = vec![ScriptInfo::new(dir.path().join("blocked.sh"), ScriptType::Shell)];
        assert_eq!(fw.migrate_all().failed, 1);
        let status = fw.scripts()[0].migration_status.clone();

        fs::remove_dir(&blocker).unwrap();
        assert!(!fw.migrate_script(0));
        assert_eq!(fw.scripts()[0].migration_status, status);
        assert_eq!(fw.migration_log().len(), 1);
        assert!(!blocker.exists());
    }

    #[test]
    fn test_migrate_script_leaves_completed_script_alone() {
        let dir = TempDir::new().unwrap();
        let mut fw = framework(&dir, false);
        fw.scripts = vec![ScriptInfo::new(dir.path().join("once.sh"), ScriptType::Shell)];
        assert!(fw.migrate_script(0));
        let notes = fw.scripts()[0].migration_notes.clone();

        assert!(!fw.migrate_script(0));
        assert_eq!(fw.scripts()[0].migration_status, MigrationStatus::Completed);
        assert_eq!(fw.scripts()[0].migration_notes, notes);
        assert_eq!(fw.migration_log().len(), 1);
    }

    #[test]
    fn test_save_report_default_location() {
        let dir = TempDir::new().unwrap();
        let fw = framework(&dir, false);
        let path = fw.save_report(None).unwrap();
        assert_eq!(path, dir.path().join("out").join(REPORT_FILE_NAME));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Script Migration Report"));
    }
}
