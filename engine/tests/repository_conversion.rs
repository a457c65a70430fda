use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use script_migrate_core::ScriptType;
use script_migrate_engine::EngineError;
use script_migrate_engine::analyzer::analyze_repository;
use script_migrate_engine::converter::{Difficulty, analyze_script_complexity, convert, convert_script};
use tempfile::TempDir;

fn padded(body: &str) -> String {
    format!("{body}\n{}\n", "# padding line for the minimum size\n".repeat(4))
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn discovered_types_match_their_file_patterns() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "build.sh", &padded("#!/bin/sh\nmake"));
    write(dir.path(), "tools/env.bash", &padded("#!/bin/bash\nexport A=1"));
    write(dir.path(), "util/mkdef.pl", &padded("#!/usr/bin/perl\nuse strict;"));
    write(dir.path(), "util/Helper.pm", &padded("package Helper;\n1;"));
    write(dir.path(), "scripts/release.py", &padded("import os"));

    let scripts = analyze_repository(dir.path(), &ScriptType::ALL.into_iter().collect()).unwrap();
    assert_eq!(scripts.len(), 5);
    for script in &scripts {
        assert_eq!(ScriptType::detect(&script.path), Some(script.script_type), "{}", script.name);
    }
}

#[test]
fn excluded_names_and_small_files_are_never_returned() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "run_TESTS.sh", &padded("#!/bin/sh"));
    write(dir.path(), "ExampleSetup.pl", &padded("#!/usr/bin/perl"));
    write(dir.path(), "gen_docs.sh", &padded("#!/bin/sh"));
    write(dir.path(), "tiny.sh", "#!/bin/sh\nls\n");
    write(dir.path(), "keep.sh", &padded("#!/bin/sh"));

    let types = BTreeSet::from([ScriptType::Shell, ScriptType::Perl]);
    let names: Vec<String> = analyze_repository(dir.path(), &types)
        .unwrap()
        .into_iter()
        .map(|script| script.name)
        .collect();
    assert_eq!(names, vec!["keep.sh"]);
}

#[test]
fn disabled_types_are_not_discovered() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "build.sh", &padded("#!/bin/sh"));
    write(dir.path(), "mkdef.pl", &padded("#!/usr/bin/perl"));

    let scripts = analyze_repository(dir.path(), &BTreeSet::from([ScriptType::Perl])).unwrap();
    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].script_type, ScriptType::Perl);
}

#[test]
fn missing_root_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = analyze_repository(&dir.path().join("gone"), &BTreeSet::from([ScriptType::Shell]))
        .unwrap_err();
    assert!(matches!(err, EngineError::RepositoryNotFound(_)));
}

#[test]
fn echo_becomes_print() {
    let python = convert("#!/bin/bash\necho \"hi\"", "hi.sh", ScriptType::Shell).unwrap();
    assert!(python.contains("print(\"hi\")"));
    assert!(!python.contains("echo"));
}

#[test]
fn file_test_becomes_pathlib_call() {
    let python = convert("if [ -f foo ]; then\n  ls\nfi\n", "check.sh", ScriptType::Shell).unwrap();
    assert!(python.contains("Path(\"foo\").is_file()"));
}

#[test]
fn perl_conversion_reports_fired_rules() {
    let conversion = convert_script(
        "#!/usr/bin/perl\nuse File::Copy;\nsub run {\n  my $x = 1;\n}\n",
        "run.pl",
        ScriptType::Perl,
    )
    .unwrap();
    assert!(conversion.code.contains("import shutil"));
    assert!(conversion.code.contains("def run():"));
    assert!(conversion.applied_rules.contains(&"perl.use"));
    assert!(conversion.applied_rules.contains(&"perl.subroutine"));
}

#[test]
fn python_input_is_rejected() {
    let err = convert("print('hi')", "x.py", ScriptType::Python).unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedScriptType(ScriptType::Python)));
}

#[test]
fn empty_script_has_zero_complexity() {
    let report = analyze_script_complexity("", ScriptType::Shell);
    assert_eq!(report.complexity_score, 0);
    assert_eq!(report.difficulty, Difficulty::Low);
}
