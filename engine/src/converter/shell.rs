//! Shell (sh/bash) rewrite rules.

use std::sync::LazyLock;

use regex::Captures;

use super::rules::{Construct, RewriteRule, apply_rules};

/// Ordered rule list for shell scripts.
pub static SHELL_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule::template(
            "shell.shebang",
            Construct::Shebang,
            r"^#!/bin/(?:bash|sh).*\n",
            "",
        ),
        RewriteRule::template("shell.variable", Construct::Variable, r"\$(\w+)", "${1}"),
        RewriteRule::template(
            "shell.braced_variable",
            Construct::Variable,
            r"\$\{(\w+)\}",
            "${1}",
        ),
        RewriteRule::template(
            "shell.command_substitution",
            Construct::CommandSubstitution,
            r"\$\(([^)]+)\)",
            r#"subprocess.check_output("${1}", shell=True, text=True).strip()"#,
        ),
        RewriteRule::rewrite(
            "shell.test_conditional",
            Construct::Conditional,
            r"\b(el)?if\s+\[([^\]]+)\]",
            rewrite_test_conditional,
        ),
        RewriteRule::template(
            "shell.for_loop",
            Construct::Loop,
            r"\bfor\s+(\w+)\s+in\s+([^;\n]+)",
            "for ${1} in ${2}:",
        ),
        RewriteRule::template(
            "shell.function",
            Construct::Function,
            r"(\w+)\s*\(\s*\)\s*\{",
            "def ${1}():",
        ),
        RewriteRule::template(
            "shell.echo_string",
            Construct::Command,
            r#"\becho\s+"([^"]*)""#,
            r#"print("${1}")"#,
        ),
        // Sigils are already gone by the time this runs.
        RewriteRule::template(
            "shell.echo_variable",
            Construct::Command,
            r"\becho\s+\$?(\w+)",
            "print(${1})",
        ),
        RewriteRule::template("shell.cd", Construct::Command, r"\bcd\s+(\w+)", r#"os.chdir("${1}")"#),
        RewriteRule::template("shell.pwd", Construct::Command, r"\bpwd\b", "os.getcwd()"),
        RewriteRule::template(
            "shell.mkdir",
            Construct::Command,
            r"\bmkdir\s+(\w+)",
            r#"Path("${1}").mkdir(parents=True, exist_ok=True)"#,
        ),
        RewriteRule::template(
            "shell.rm",
            Construct::Command,
            r"\brm\s+(\w+)",
            r#"Path("${1}").unlink()"#,
        ),
        RewriteRule::template(
            "shell.cp",
            Construct::Command,
            r"\bcp\s+(\w+)\s+(\w+)",
            r#"shutil.copy("${1}", "${2}")"#,
        ),
        RewriteRule::template(
            "shell.mv",
            Construct::Command,
            r"\bmv\s+(\w+)\s+(\w+)",
            r#"shutil.move("${1}", "${2}")"#,
        ),
    ]
});

/// `test` operators rewritten inside a `[ ... ]` condition.
static TEST_OPERATORS: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule::template(
            "shell.test_file",
            Construct::Conditional,
            r#"-f\s+"?(\w+)"?"#,
            r#"Path("${1}").is_file()"#,
        ),
        RewriteRule::template(
            "shell.test_dir",
            Construct::Conditional,
            r#"-d\s+"?(\w+)"?"#,
            r#"Path("${1}").is_dir()"#,
        ),
        RewriteRule::template(
            "shell.test_exists",
            Construct::Conditional,
            r#"-e\s+"?(\w+)"?"#,
            r#"Path("${1}").exists()"#,
        ),
        RewriteRule::template(
            "shell.test_empty",
            Construct::Conditional,
            r#"-z\s+"?(\w+)"?"#,
            "not ${1}",
        ),
        RewriteRule::template(
            "shell.test_non_empty",
            Construct::Conditional,
            r#"-n\s+"?(\w+)"?"#,
            "${1}",
        ),
    ]
});

fn rewrite_test_conditional(caps: &Captures<'_>) -> String {
    let keyword = if caps.get(1).is_some() { "elif" } else { "if" };
    let condition = apply_rules(&TEST_OPERATORS, &caps[2]);
    format!("{keyword} {}:", condition.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static RewriteRule {
        SHELL_RULES
            .iter()
            .find(|rule| rule.name() == name)
            .unwrap_or_else(|| panic!("missing rule {name}"))
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<&str> = SHELL_RULES.iter().map(RewriteRule::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SHELL_RULES.len());
    }

    #[test]
    fn test_shebang_only_at_start() {
        let shebang = rule("shell.shebang");
        assert_eq!(shebang.apply("#!/bin/bash -e\necho hi\n"), "echo hi\n");
        assert_eq!(shebang.apply("#!/bin/sh\n"), "");
        assert_eq!(
            shebang.apply("echo hi\n#!/bin/sh\n"),
            "echo hi\n#!/bin/sh\n"
        );
        assert!(!shebang.matches("#!/usr/bin/env bash\n"));
    }

    #[test]
    fn test_variables_lose_sigils() {
        assert_eq!(rule("shell.variable").apply("cd $PREFIX/lib"), "cd PREFIX/lib");
        assert_eq!(rule("shell.braced_variable").apply("${HOME}/bin"), "HOME/bin");
    }

    #[test]
    fn test_command_substitution() {
        assert_eq!(
            rule("shell.command_substitution").apply("VERSION=$(git describe)"),
            r#"VERSION=subprocess.check_output("git describe", shell=True, text=True).strip()"#
        );
    }

    #[test]
    fn test_conditionals_map_test_operators() {
        let cond = rule("shell.test_conditional");
        assert_eq!(
            cond.apply("if [ -f foo ]; then"),
            r#"if Path("foo").is_file():; then"#
        );
        assert_eq!(cond.apply("if [ -d build ]"), r#"if Path("build").is_dir():"#);
        assert_eq!(cond.apply("if [ -e out ]"), r#"if Path("out").exists():"#);
        assert_eq!(cond.apply(r#"if [ -z "PREFIX" ]"#), "if not PREFIX:");
        assert_eq!(cond.apply("if [ -n CC ]"), "if CC:");
        assert_eq!(cond.apply("if [ a = b ]"), "if a = b:");
        assert_eq!(cond.apply("elif [ -d x ]; then"), r#"elif Path("x").is_dir():; then"#);
        assert!(!cond.matches("elif test x"));
    }

    #[test]
    fn test_for_loop_stays_on_one_line() {
        assert_eq!(
            rule("shell.for_loop").apply("for f in a b c; do"),
            "for f in a b c:; do"
        );
        assert_eq!(
            rule("shell.for_loop").apply("for f in *.c\ndo"),
            "for f in *.c:\ndo"
        );
    }

    #[test]
    fn test_function_definition() {
        assert_eq!(
            rule("shell.function").apply("build_all() {\n  make\n}"),
            "def build_all():\n  make\n}"
        );
    }

    #[test]
    fn test_command_table() {
        assert_eq!(rule("shell.echo_string").apply(r#"echo "hi""#), r#"print("hi")"#);
        assert_eq!(rule("shell.echo_variable").apply("echo VERSION"), "print(VERSION)");
        assert_eq!(rule("shell.cd").apply("cd build"), r#"os.chdir("build")"#);
        assert_eq!(rule("shell.pwd").apply("HERE=pwd"), "HERE=os.getcwd()");
        assert_eq!(
            rule("shell.mkdir").apply("mkdir out"),
            r#"Path("out").mkdir(parents=True, exist_ok=True)"#
        );
        assert_eq!(rule("shell.rm").apply("rm stale"), r#"Path("stale").unlink()"#);
        assert_eq!(rule("shell.cp").apply("cp a b"), r#"shutil.copy("a", "b")"#);
        assert_eq!(rule("shell.mv").apply("mv a b"), r#"shutil.move("a", "b")"#);
    }

    #[test]
    fn test_command_rules_need_word_boundary() {
        assert!(!rule("shell.rm").matches("perform x"));
        assert!(!rule("shell.cd").matches("abcd x"));
        assert!(!rule("shell.pwd").matches("pwdx"));
    }
}
