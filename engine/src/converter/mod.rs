//! Regex-driven conversion of shell and Perl scripts to draft Python.
//!
//! Conversion is best-effort text rewriting. Each source language is a
//! [`Dialect`] with an ordered list of named [`RewriteRule`]s; the rules run
//! over the whole script one after another and the result is wrapped in a
//! click-based Python module (see [`wrap_converted`]). Constructs that no
//! rule recognizes are carried over verbatim, so conversion of shell or Perl
//! input never fails.
//!
//! ```
//! use script_migrate_core::ScriptType;
//! use script_migrate_engine::converter::convert;
//!
//! let python = convert("#!/bin/bash\necho \"hi\"\n", "hello.sh", ScriptType::Shell).unwrap();
//! assert!(python.contains("print(\"hi\")"));
//! ```

pub mod complexity;
pub mod perl;
pub mod rules;
pub mod shell;
pub mod wrapper;

use script_migrate_core::ScriptType;
use tracing::{debug, info};

use crate::error::{EngineError, Result};

pub use complexity::{
    ComplexityReport, Difficulty, FeatureCount, analyze_script_complexity, suggest_improvements,
};
pub use rules::{Construct, RewriteRule, apply_rules};
pub use wrapper::{LOGIC_PLACEHOLDER, wrap_converted};

/// A source language the converter can rewrite.
pub trait Dialect {
    fn script_type(&self) -> ScriptType;
    /// Rules in application order.
    fn rules(&self) -> &'static [RewriteRule];
}

pub struct ShellDialect;

impl Dialect for ShellDialect {
    fn script_type(&self) -> ScriptType {
        ScriptType::Shell
    }

    fn rules(&self) -> &'static [RewriteRule] {
        shell::SHELL_RULES.as_slice()
    }
}

pub struct PerlDialect;

impl Dialect for PerlDialect {
    fn script_type(&self) -> ScriptType {
        ScriptType::Perl
    }

    fn rules(&self) -> &'static [RewriteRule] {
        perl::PERL_RULES.as_slice()
    }
}

/// Returns the dialect for `script_type`, or `None` for Python.
pub fn dialect_for(script_type: ScriptType) -> Option<&'static dyn Dialect> {
    match script_type {
        ScriptType::Shell => Some(&ShellDialect),
        ScriptType::Perl => Some(&PerlDialect),
        ScriptType::Python => None,
    }
}

/// Output of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub script_type: ScriptType,
    /// Complete Python module text.
    pub code: String,
    /// Names of the rules that matched, in application order.
    pub applied_rules: Vec<&'static str>,
}

/// Rewrites `content` with the dialect's rules, without the module wrapper.
///
/// Returns the converted body and the names of the rules that fired.
pub fn convert_body(content: &str, dialect: &dyn Dialect) -> (String, Vec<&'static str>) {
    let mut text = content.to_string();
    let mut applied = Vec::new();
    for rule in dialect.rules() {
        if rule.matches(&text) {
            text = rule.apply(&text).into_owned();
            applied.push(rule.name());
        }
    }
    (text, applied)
}

/// Converts a script and reports which rules fired.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedScriptType`] for Python input, which
/// has nothing to convert.
pub fn convert_script(content: &str, script_name: &str, script_type: ScriptType) -> Result<Conversion> {
    let dialect =
        dialect_for(script_type).ok_or(EngineError::UnsupportedScriptType(script_type))?;

    info!(script = script_name, script_type = %script_type, "Converting script");
    let (body, applied_rules) = convert_body(content, dialect);
    debug!(script = script_name, rules = ?applied_rules, "Applied rewrite rules");

    Ok(Conversion {
        script_type,
        code: wrap_converted(script_name, script_type, &body),
        applied_rules,
    })
}

/// Converts a script to a Python module.
pub fn convert(content: &str, script_name: &str, script_type: ScriptType) -> Result<String> {
    convert_script(content, script_name, script_type).map(|conversion| conversion.code)
}

/// Converts a shell script.
pub fn convert_shell_script(content: &str, script_name: &str) -> String {
    let (body, _) = convert_body(content, &ShellDialect);
    wrap_converted(script_name, ScriptType::Shell, &body)
}

/// Converts a Perl script.
pub fn convert_perl_script(content: &str, script_name: &str) -> String {
    let (body, _) = convert_body(content, &PerlDialect);
    wrap_converted(script_name, ScriptType::Perl, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_becomes_print() {
        let out = convert_shell_script("#!/bin/bash\necho \"hi\"\n", "hi.sh");
        assert!(out.contains("print(\"hi\")"));
        assert!(!out.contains("echo"));
        assert!(!out.contains("#!/bin/bash"));
    }

    #[test]
    fn test_file_test_becomes_pathlib() {
        let out = convert_shell_script("if [ -f foo ]; then\n  make\nfi\n", "x.sh");
        assert!(out.contains("Path(\"foo\").is_file()"));
    }

    #[test]
    fn test_variables_stripped_before_substitution() {
        let (body, applied) =
            convert_body("OUT=$(ls $DIR)\necho $OUT\n", &ShellDialect);
        assert_eq!(
            body,
            "OUT=subprocess.check_output(\"ls DIR\", shell=True, text=True).strip()\nprint(OUT)\n"
        );
        assert_eq!(
            applied,
            vec![
                "shell.variable",
                "shell.command_substitution",
                "shell.echo_variable"
            ]
        );
    }

    #[test]
    fn test_perl_pipeline() {
        let content = "#!/usr/bin/perl -w\nuse File::Copy;\nsub install {\n  if (-d $prefix) {\n    close(FH);\n  }\n}\n";
        let (body, _) = convert_body(content, &PerlDialect);
        assert!(!body.contains("#!/usr/bin/perl"));
        assert!(body.contains("import shutil;"));
        assert!(body.contains("def install(): {"));
        assert!(body.contains("if Path(\"prefix\").is_dir(): {"));
        assert!(body.contains("FH.close();"));
    }

    #[test]
    fn test_unmatched_text_is_verbatim() {
        let (body, applied) = convert_body("make -j4 all\n", &ShellDialect);
        assert_eq!(body, "make -j4 all\n");
        assert!(applied.is_empty());
    }

    #[test]
    fn test_python_is_rejected() {
        let err = convert("print('x')", "x.py", ScriptType::Python).unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnsupportedScriptType(ScriptType::Python)
        ));
    }

    #[test]
    fn test_convert_script_records_type() {
        let conversion = convert_script("sub main {}\n", "m.pl", ScriptType::Perl).unwrap();
        assert_eq!(conversion.script_type, ScriptType::Perl);
        assert!(conversion.code.contains("Migrated from perl script."));
        assert_eq!(conversion.applied_rules, vec!["perl.subroutine"]);
    }

    #[test]
    fn test_dialects_cover_shell_and_perl_only() {
        assert_eq!(
            dialect_for(ScriptType::Shell).map(|d| d.script_type()),
            Some(ScriptType::Shell)
        );
        assert_eq!(
            dialect_for(ScriptType::Perl).map(|d| d.script_type()),
            Some(ScriptType::Perl)
        );
        assert!(dialect_for(ScriptType::Python).is_none());
    }
}
