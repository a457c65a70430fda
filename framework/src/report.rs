//! Markdown migration reports.

use script_migrate_core::{LogOutcome, MigrationConfig, MigrationLogEntry, MigrationStatus, ScriptInfo};
use serde::Serialize;

/// Counts returned by a batch migration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MigrationSummary {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
    /// Scripts that were not pending when the batch started.
    pub skipped: usize,
}

impl MigrationSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

fn status_title(label: &str) -> &'static str {
    match label {
        "pending" => "Pending",
        "in_progress" => "In Progress",
        "completed" => "Completed",
        _ => "Failed",
    }
}

/// Renders the report for a run.
///
/// `generated_at` is passed in so the output stays deterministic for a given
/// input.
pub fn migration_report_markdown(
    config: &MigrationConfig,
    scripts: &[ScriptInfo],
    log: &[MigrationLogEntry],
    generated_at: &str,
) -> String {
    let mut out = String::new();

    out.push_str("# Script Migration Report\n");
    out.push_str(&format!("Generated: {generated_at}\n"));
    out.push_str(&format!("Source Repository: {}\n", config.source_repo.display()));
    out.push_str(&format!("Target Directory: {}\n", config.target_dir.display()));
    out.push_str(&format!("Output Format: {}\n\n", config.output_format));

    out.push_str("## Summary\n");
    out.push_str(&format!("- Total Scripts: {}\n", scripts.len()));
    for label in MigrationStatus::LABELS {
        let count = scripts
            .iter()
            .filter(|script| script.migration_status.label() == label)
            .count();
        if count > 0 {
            out.push_str(&format!("- {}: {count}\n", status_title(label)));
        }
    }
    out.push('\n');

    out.push_str("## Detailed Results\n");
    for script in scripts {
        let functions = if script.functions.is_empty() {
            "None".to_string()
        } else {
            script.functions.join(", ")
        };
        out.push_str(&format!("### {}\n", script.name));
        out.push_str(&format!("- Type: {}\n", script.script_type));
        out.push_str(&format!("- Size: {} bytes\n", script.size));
        out.push_str(&format!("- Lines: {}\n", script.lines));
        out.push_str(&format!("- Functions: {functions}\n"));
        out.push_str(&format!("- Status: {}\n", script.migration_status));
        if let Some(notes) = &script.migration_notes {
            out.push_str(&format!("- Notes: {notes}\n"));
        }
        out.push('\n');
    }

    if !log.is_empty() {
        out.push_str("## Migration Log\n");
        for entry in log {
            match &entry.outcome {
                LogOutcome::Completed { target_path } => out.push_str(&format!(
                    "- {} `{}` completed: {}\n",
                    entry.timestamp,
                    entry.script,
                    target_path.display()
                )),
                LogOutcome::Failed { error } => out.push_str(&format!(
                    "- {} `{}` failed: {error}\n",
                    entry.timestamp, entry.script
                )),
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use script_migrate_core::ScriptType;

    fn scripts() -> Vec<ScriptInfo> {
        let mut done = ScriptInfo::new("repo/install.sh", ScriptType::Shell);
        done.functions = vec!["check".into(), "build".into()];
        done.migration_status = MigrationStatus::Completed;
        done.migration_notes = Some("Migrated to out/install.py".into());

        let mut broken = ScriptInfo::new("repo/configure.pl", ScriptType::Perl);
        broken.migration_status = MigrationStatus::Failed("disk full".into());
        broken.migration_notes = Some("disk full".into());

        vec![done, broken, ScriptInfo::new("repo/setup.sh", ScriptType::Shell)]
    }

    #[test]
    fn test_report_sections() {
        let config = MigrationConfig::new("repo", "out");
        let report = migration_report_markdown(&config, &scripts(), &[], "2026-01-01T00:00:00Z");

        assert!(report.starts_with("# Script Migration Report\nGenerated: 2026-01-01T00:00:00Z\n"));
        assert!(report.contains("Source Repository: repo\nTarget Directory: out\nOutput Format: modern\n\n## Summary\n"));
        assert!(report.contains("Output Format: modern\n"));
        assert!(report.contains("- Total Scripts: 3\n"));
        assert!(report.contains("- Pending: 1\n"));
        assert!(report.contains("- Completed: 1\n"));
        assert!(report.contains("- Failed: 1\n"));
        assert!(!report.contains("In Progress"));
        assert!(report.contains("### install.sh\n- Type: shell\n"));
        assert!(report.contains("- Functions: check, build\n"));
        assert!(report.contains("- Functions: None\n"));
        assert!(report.contains("- Status: completed\n- Notes: Migrated to out/install.py\n"));
        assert!(report.contains("- Status: failed\n- Notes: disk full\n"));
        assert!(!report.contains("## Migration Log"));
    }

    #[test]
    fn test_report_lists_log_entries() {
        let config = MigrationConfig::new("repo", "out");
        let log = vec![
            MigrationLogEntry {
                timestamp: "t1".into(),
                script: "install.sh".into(),
                outcome: LogOutcome::Completed {
                    target_path: "out/install.py".into(),
                },
            },
            MigrationLogEntry {
                timestamp: "t2".into(),
                script: "configure.pl".into(),
                outcome: LogOutcome::Failed {
                    error: "disk full".into(),
                },
            },
        ];
        let report = migration_report_markdown(&config, &scripts(), &log, "now");
        assert!(report.contains("## Migration Log\n"));
        assert!(report.contains("- t1 `install.sh` completed: out/install.py\n"));
        assert!(report.contains("- t2 `configure.pl` failed: disk full\n"));
    }

    #[test]
    fn test_summary_failures() {
        let summary = MigrationSummary {
            total: 2,
            completed: 1,
            failed: 1,
            skipped: 0,
        };
        assert!(summary.has_failures());
        assert!(!MigrationSummary::default().has_failures());
    }
}
