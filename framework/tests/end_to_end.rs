use std::fs;
use std::path::Path;

use script_migrate_core::{MigrationConfig, MigrationStatus, ScriptType};
use script_migrate_framework::{MigrationFramework, PlanFormat, REPORT_FILE_NAME, format_plan};
use tempfile::TempDir;

const INSTALL_SH: &str = r#"#!/bin/bash
# Installs OpenSSL into the given prefix
check_prefix() {
    if [ -d $PREFIX ]; then
        echo "prefix exists"
    fi
}
VERSION=$(cat VERSION.dat)
check_prefix
make install
"#;

const CONFIGURE_PL: &str = r#"#!/usr/bin/perl
# Configures the OpenSSL build tree
use strict;
use File::Copy;

sub configure_target {
    my $target = shift;
    print "Configuring $target\n";
}

configure_target("linux-x86_64");
"#;

fn write_repo(root: &Path) {
    fs::create_dir_all(root.join("util")).unwrap();
    fs::write(root.join("util").join("install.sh"), INSTALL_SH).unwrap();
    fs::write(root.join("configure.pl"), CONFIGURE_PL).unwrap();
    // Excluded by name and by size.
    fs::write(root.join("util").join("run_tests.sh"), INSTALL_SH).unwrap();
    fs::write(root.join("tiny.sh"), "#!/bin/sh\necho hi\n").unwrap();
}

fn framework(source: &TempDir, target: &TempDir) -> MigrationFramework {
    let config = MigrationConfig::new(source.path(), target.path().join("migrated"));
    MigrationFramework::new(config).unwrap()
}

#[test]
fn analyze_and_migrate_shell_and_perl() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write_repo(source.path());

    let mut fw = framework(&source, &target);
    let scripts = fw.analyze_repository(source.path()).unwrap();
    let mut names: Vec<&str> = scripts.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["configure.pl", "install.sh"]);

    let install = scripts.iter().find(|s| s.name == "install.sh").unwrap();
    assert_eq!(install.script_type, ScriptType::Shell);
    assert_eq!(install.functions, vec!["check_prefix"]);
    assert_eq!(
        install.description.as_deref(),
        Some("Installs OpenSSL into the given prefix")
    );

    let configure = scripts.iter().find(|s| s.name == "configure.pl").unwrap();
    assert_eq!(configure.functions, vec!["configure_target"]);
    assert!(configure.dependencies.contains("File::Copy"));

    let plan = fw.generate_migration_plan();
    assert_eq!(plan.total_scripts, fw.scripts().len());

    let summary = fw.migrate_all();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.failed, 0);

    let out = target.path().join("migrated");
    for file in [out.join("util").join("install.py"), out.join(source_dir_name(&source)).join("configure.py")] {
        let code = fs::read_to_string(&file).unwrap_or_else(|err| panic!("{}: {err}", file.display()));
        assert!(code.contains("@click.command()\n"));
        assert!(code.contains("def main(verbose: bool, dry_run: bool):"));
        assert!(code.contains("# Add your migrated logic here"));
    }

    let report_path = fw.save_report(None).unwrap();
    assert_eq!(report_path, out.join(REPORT_FILE_NAME));
    let report = fs::read_to_string(report_path).unwrap();
    assert!(report.contains("### install.sh"));
    assert!(report.contains("### configure.pl"));
    assert_eq!(report.matches("- Status: completed").count(), 2);
    assert!(report.contains("- Completed: 2"));
    assert!(report.contains("## Migration Log"));
}

#[test]
fn second_migration_skips_everything() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write_repo(source.path());

    let mut fw = framework(&source, &target);
    fw.analyze_repository(source.path()).unwrap();
    fw.migrate_all();

    let again = fw.migrate_all();
    assert_eq!(again.total, 2);
    assert_eq!(again.skipped, again.total);
    assert_eq!(again.completed, 0);
    assert_eq!(fw.migration_log().len(), 2);
}

#[test]
fn write_failure_is_recorded_and_batch_continues() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write_repo(source.path());

    let mut config = MigrationConfig::new(source.path(), target.path().join("migrated"));
    config.preserve_structure = false;
    let mut fw = MigrationFramework::new(config).unwrap();
    fs::create_dir_all(target.path().join("migrated").join("install.py")).unwrap();

    fw.analyze_repository(source.path()).unwrap();
    let summary = fw.migrate_all();
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.failed, 1);

    let install = fw.scripts().iter().find(|s| s.name == "install.sh").unwrap();
    assert!(matches!(install.migration_status, MigrationStatus::Failed(_)));
    assert!(target.path().join("migrated").join("configure.py").is_file());

    let report = fw.generate_report();
    assert!(report.contains("- Failed: 1"));
}

#[test]
fn detailed_plan_formats() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write_repo(source.path());

    let mut fw = framework(&source, &target);
    fw.analyze_repository(source.path()).unwrap();
    let plan = fw.generate_detailed_plan();
    assert_eq!(plan.scripts.as_ref().map(Vec::len), Some(2));

    let json = format_plan(&plan, PlanFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_scripts"], 2);
    assert_eq!(value["estimated_effort"]["perl"], "3 hours (high complexity)");
}

fn source_dir_name(source: &TempDir) -> String {
    source
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned()
}
