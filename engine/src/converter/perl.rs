//! Perl rewrite rules.

use std::sync::LazyLock;

use regex::Captures;

use super::rules::{Construct, RewriteRule, apply_rules};

/// Perl modules with a known Python counterpart.
const MODULE_MAP: &[(&str, &str)] = &[
    ("File::Path", "pathlib"),
    ("File::Copy", "shutil"),
    ("Getopt::Long", "argparse"),
    ("POSIX", "os"),
    ("Cwd", "os"),
];

/// Ordered rule list for Perl scripts.
pub static PERL_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule::template("perl.shebang", Construct::Shebang, r"^#!/usr/bin/perl.*\n", ""),
        RewriteRule::template("perl.scalar", Construct::Variable, r"\$(\w+)", "${1}"),
        RewriteRule::template("perl.array", Construct::Variable, r"@(\w+)", "${1}"),
        RewriteRule::template("perl.hash", Construct::Variable, r"%(\w+)", "${1}"),
        RewriteRule::template("perl.subroutine", Construct::Function, r"\bsub\s+(\w+)", "def ${1}():"),
        RewriteRule::rewrite("perl.use", Construct::Module, r"\buse\s+([\w:]+)", rewrite_use),
        RewriteRule::rewrite(
            "perl.conditional",
            Construct::Conditional,
            r"\b(els)?if\s*\(([^)]+)\)",
            rewrite_conditional,
        ),
        RewriteRule::template(
            "perl.c_style_for",
            Construct::Loop,
            r"\bfor\s*\([^;]*;\s*([^;]+);\s*[^)]*\)",
            "for ${1}:",
        ),
        RewriteRule::template(
            "perl.open",
            Construct::FileOperation,
            r#"\bopen\s*\(\s*(\w+),\s*["']([^"']+)["']\s*\)"#,
            r#"${1} = open("${2}", "r")"#,
        ),
        RewriteRule::template(
            "perl.close",
            Construct::FileOperation,
            r"\bclose\s*\(\s*(\w+)\s*\)",
            "${1}.close()",
        ),
        RewriteRule::template(
            "perl.read",
            Construct::FileOperation,
            r"\bread\s*\(\s*(\w+),\s*(\w+),\s*(\d+)\s*\)",
            "${2} = ${1}.read(${3})",
        ),
        RewriteRule::template(
            "perl.write",
            Construct::FileOperation,
            r"\bwrite\s*\(\s*(\w+),\s*(\w+)\s*\)",
            "${1}.write(${2})",
        ),
    ]
});

static FILE_TESTS: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule::template(
            "perl.test_file",
            Construct::Conditional,
            r"-f\s+(\w+)",
            r#"Path("${1}").is_file()"#,
        ),
        RewriteRule::template(
            "perl.test_dir",
            Construct::Conditional,
            r"-d\s+(\w+)",
            r#"Path("${1}").is_dir()"#,
        ),
        RewriteRule::template(
            "perl.test_exists",
            Construct::Conditional,
            r"-e\s+(\w+)",
            r#"Path("${1}").exists()"#,
        ),
    ]
});

/// Maps a Perl module name to the Python module imported in its place.
///
/// Unknown modules are lowercased with `::` turned into `.`.
pub fn python_module_for(perl_module: &str) -> String {
    MODULE_MAP
        .iter()
        .find(|(perl, _)| *perl == perl_module)
        .map(|(_, python)| (*python).to_string())
        .unwrap_or_else(|| perl_module.to_lowercase().replace("::", "."))
}

fn rewrite_use(caps: &Captures<'_>) -> String {
    format!("import {}", python_module_for(&caps[1]))
}

fn rewrite_conditional(caps: &Captures<'_>) -> String {
    let keyword = if caps.get(1).is_some() { "elif" } else { "if" };
    let condition = apply_rules(&FILE_TESTS, &caps[2]);
    format!("{keyword} {}:", condition.trim())
}
