//! Repository analysis: discovers legacy scripts and extracts shallow metadata.
//!
//! Discovery walks the repository tree and keeps files whose name matches the
//! glob patterns of an enabled [`ScriptType`]. Names that look like tests,
//! docs or samples are skipped, as are files smaller than
//! [`MIN_SCRIPT_SIZE`] bytes. Metadata extraction is regex-only and never
//! aborts the batch: an unreadable file is still reported, with placeholder
//! metadata and an `Error analyzing: ...` description.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use glob::Pattern;
use regex::Regex;
use script_migrate_core::{ScriptInfo, ScriptType};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{EngineError, Result};

/// Files smaller than this many bytes are not worth migrating.
pub const MIN_SCRIPT_SIZE: u64 = 100;

/// Lowercased name fragments that exclude a file from migration.
pub const EXCLUDED_NAME_PARTS: &[&str] = &[
    "test",
    "spec",
    "doc",
    "example",
    "sample",
    "readme",
    "changelog",
    "license",
];

/// Number of leading lines searched for a description.
const DESCRIPTION_SCAN_LINES: usize = 20;

/// Shell words never reported as external dependencies.
const SHELL_BUILTINS: &[&str] = &[
    "echo", "cd", "ls", "pwd", "mkdir", "rm", "cp", "mv", "if", "for", "while", "do", "done",
    "then", "else", "fi",
];

static TYPE_PATTERNS: LazyLock<Vec<(ScriptType, Pattern)>> = LazyLock::new(|| {
    ScriptType::ALL
        .iter()
        .flat_map(|&script_type| {
            script_type.glob_patterns().iter().map(move |raw| {
                (
                    script_type,
                    Pattern::new(raw).expect("static glob pattern must compile"),
                )
            })
        })
        .collect()
});

static SHELL_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(\w+)\s*\(\s*\)\s*\{").expect("static regex must compile")
});
static PERL_SUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*sub\s+(\w+)").expect("static regex must compile"));
static PYTHON_DEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*def\s+(\w+)\s*\(").expect("static regex must compile"));

static SHELL_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+").expect("static regex must compile"));
static PERL_USE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"use\s+([\w:]+)").expect("static regex must compile"));
static PYTHON_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:from\s+(\w+)\s+import|import\s+(\w+))").expect("static regex must compile")
});

/// Discovers and analyzes every migratable script under `root`.
///
/// Only the types in `script_types` are considered. The walk is sorted by
/// file name so repeated runs list scripts in the same order, although
/// callers should not rely on any particular order.
///
/// # Errors
///
/// Returns [`EngineError::RepositoryNotFound`] when `root` does not exist and
/// [`EngineError::NotADirectory`] when it is a regular file. Per-file
/// failures are logged and never returned.
pub fn analyze_repository(
    root: &Path,
    script_types: &BTreeSet<ScriptType>,
) -> Result<Vec<ScriptInfo>> {
    if !root.exists() {
        return Err(EngineError::RepositoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(EngineError::NotADirectory(root.to_path_buf()));
    }

    info!(repo = %root.display(), "Analyzing repository");

    let mut scripts = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let Some(script_type) = classify(&file_name, script_types) else {
            continue;
        };

        match should_migrate(entry.path()) {
            Ok(true) => {}
            Ok(false) => {
                debug!(path = %entry.path().display(), "Skipping script");
                continue;
            }
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "Cannot stat script, skipping");
                continue;
            }
        }

        scripts.push(analyze_script(entry.path(), script_type));
    }

    info!(count = scripts.len(), "Found scripts to migrate");
    Ok(scripts)
}

/// Returns the enabled script type whose glob pattern matches `file_name`.
pub fn classify(file_name: &str, enabled: &BTreeSet<ScriptType>) -> Option<ScriptType> {
    TYPE_PATTERNS
        .iter()
        .find(|(script_type, pattern)| enabled.contains(script_type) && pattern.matches(file_name))
        .map(|(script_type, _)| *script_type)
}

/// Returns `true` when the file name contains an excluded fragment.
pub fn is_excluded_name(file_name: &str) -> bool {
    let lowered = file_name.to_lowercase();
    EXCLUDED_NAME_PARTS
        .iter()
        .any(|part| lowered.contains(part))
}

/// Applies the exclusion policy to one candidate file.
///
/// # Errors
///
/// Returns the I/O error when the file's metadata cannot be read.
pub fn should_migrate(path: &Path) -> io::Result<bool> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    if is_excluded_name(&name) {
        return Ok(false);
    }
    Ok(fs::metadata(path)?.len() >= MIN_SCRIPT_SIZE)
}

/// Reads one script and extracts its metadata.
///
/// Never fails: when the file cannot be read, the returned record has size
/// and line count zero and its description carries the error.
pub fn analyze_script(path: &Path, script_type: ScriptType) -> ScriptInfo {
    match read_script(path, script_type) {
        Ok(info) => {
            debug!(
                script = %info.name,
                functions = info.functions.len(),
                dependencies = info.dependencies.len(),
                "Analyzed script"
            );
            info
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to analyze script");
            let mut info = ScriptInfo::new(path, script_type);
            info.description = Some(format!("Error analyzing: {err}"));
            info
        }
    }
}

fn read_script(path: &Path, script_type: ScriptType) -> io::Result<ScriptInfo> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);

    let mut info = ScriptInfo::new(path, script_type);
    info.size = bytes.len() as u64;
    info.lines = content.split('\n').count();
    info.functions = extract_functions(&content, script_type);
    info.dependencies = extract_dependencies(&content, script_type);
    info.description = extract_description(&content, script_type);
    Ok(info)
}

/// Extracts function (or subroutine) names in file order.
pub fn extract_functions(content: &str, script_type: ScriptType) -> Vec<String> {
    let re = match script_type {
        ScriptType::Shell => &*SHELL_FUNCTION_RE,
        ScriptType::Perl => &*PERL_SUB_RE,
        ScriptType::Python => &*PYTHON_DEF_RE,
    };
    re.captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Extracts dependencies: invoked commands for shell, imported modules
/// otherwise.
///
/// The shell heuristic treats any word followed by whitespace as a command,
/// so it over-reports.
pub fn extract_dependencies(content: &str, script_type: ScriptType) -> BTreeSet<String> {
    match script_type {
        ScriptType::Shell => SHELL_WORD_RE
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .filter(|word| word.chars().count() > 2 && !SHELL_BUILTINS.contains(&word.as_str()))
            .collect(),
        ScriptType::Perl => PERL_USE_RE
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect(),
        ScriptType::Python => PYTHON_IMPORT_RE
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
            .collect(),
    }
}

/// Finds a human-readable description in the first lines of a script.
///
/// The first `#` comment longer than three characters wins (shebangs
/// excluded). Python scripts also accept a docstring opener; an opener with
/// no text on its own line takes the next non-blank line instead.
pub fn extract_description(content: &str, script_type: ScriptType) -> Option<String> {
    let mut docstring_open = false;

    for raw in content.split('\n').take(DESCRIPTION_SCAN_LINES) {
        let line = raw.trim();

        if docstring_open {
            if line.is_empty() {
                continue;
            }
            return non_empty(strip_docstring_quotes(line));
        }

        if script_type == ScriptType::Python
            && (line.starts_with("\"\"\"") || line.starts_with("'''"))
        {
            let rest = strip_docstring_quotes(&line[3..]);
            if rest.is_empty() {
                docstring_open = true;
                continue;
            }
            return Some(rest.to_string());
        }

        if line.starts_with('#') && !line.starts_with("#!") && line.chars().count() > 3 {
            return non_empty(line[1..].trim());
        }
    }
    None
}

fn strip_docstring_quotes(text: &str) -> &str {
    text.trim_end_matches("\"\"\"")
        .trim_end_matches("'''")
        .trim()
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
