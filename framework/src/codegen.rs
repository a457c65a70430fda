//! Python module text written for each migrated script.
//!
//! The module keeps the original script's description, imports what the
//! script depended on, declares one stub per discovered function and ends in
//! a `main` entry point (click-based unless disabled).

use std::collections::BTreeSet;

use script_migrate_core::{ScriptInfo, ScriptType};
use script_migrate_engine::converter::LOGIC_PLACEHOLDER;
use script_migrate_engine::converter::perl::python_module_for;

/// Docstring used when the script had no description.
pub const DEFAULT_DESCRIPTION: &str = "Migrated script";

/// Modules every migrated script imports.
const STANDARD_MODULES: &[&str] = &["os", "sys", "subprocess", "pathlib", "logging"];

/// Perl pragmas with no Python module counterpart.
const PERL_PRAGMAS: &[&str] = &[
    "strict", "warnings", "vars", "utf8", "lib", "constant", "integer",
];

/// Renders the complete Python module for `script`.
pub fn render_migrated_script(script: &ScriptInfo, use_click: bool) -> String {
    let description = script
        .description
        .as_deref()
        .unwrap_or(DEFAULT_DESCRIPTION);
    let imports = render_imports(script, use_click);
    let functions = script
        .functions
        .iter()
        .map(|name| render_function_stub(name))
        .collect::<Vec<_>>()
        .join("\n\n");
    let main = if use_click { click_main() } else { plain_main() };

    format!(
        r#""""
{description}

Migrated from {script_name}
"""

from pathlib import Path
from typing import List, Optional, Dict, Any
{imports}

# Configure logging
logging.basicConfig(level=logging.INFO)
logger = logging.getLogger(__name__)

{functions}

{main}

if __name__ == '__main__':
    main()
"#,
        script_name = script.name,
    )
}

/// Builds the import block from the standard modules and the script's
/// dependencies.
///
/// Shell dependencies are external commands rather than modules, so they are
/// listed in a comment instead of imported.
pub fn render_imports(script: &ScriptInfo, use_click: bool) -> String {
    let mut standard: Vec<&str> = STANDARD_MODULES.to_vec();
    if use_click {
        standard.push("click");
    }

    let mut lines: Vec<String> = standard.iter().map(|module| format!("import {module}")).collect();

    match script.script_type {
        ScriptType::Shell => {
            if !script.dependencies.is_empty() {
                let commands: Vec<&str> = script.dependencies.iter().map(String::as_str).collect();
                lines.push(format!("# External commands: {}", commands.join(", ")));
            }
        }
        ScriptType::Perl => {
            let modules: BTreeSet<String> = script
                .dependencies
                .iter()
                .filter(|dep| !PERL_PRAGMAS.contains(&dep.as_str()))
                .map(|dep| python_module_for(dep))
                .filter(|module| !standard.contains(&module.as_str()))
                .collect();
            lines.extend(modules.into_iter().map(|module| format!("import {module}")));
        }
        ScriptType::Python => {
            lines.extend(
                script
                    .dependencies
                    .iter()
                    .filter(|dep| !standard.contains(&dep.as_str()))
                    .map(|dep| format!("import {dep}")),
            );
        }
    }

    lines.join("\n")
}

fn render_function_stub(name: &str) -> String {
    format!(
        r#"def {name}():
    """
    Migrated function: {name}

    TODO: Implement the migrated functionality
    """
    logger.info("Executing function: {name}")

    {LOGIC_PLACEHOLDER}
    pass
"#
    )
}

fn click_main() -> String {
    format!(
        r#"@click.command()
@click.option('--verbose', '-v', is_flag=True, help='Enable verbose output')
@click.option('--dry-run', is_flag=True, help='Show what would be done without executing')
def main(verbose: bool, dry_run: bool):
    """Main entry point for the migrated script."""
    if verbose:
        logging.getLogger().setLevel(logging.DEBUG)

    logger.info("Starting migrated script")

    if dry_run:
        logger.info("Dry run mode - no changes will be made")
        return

    {LOGIC_PLACEHOLDER}
    pass
"#
    )
}

fn plain_main() -> String {
    format!(
        r#"def main():
    """Main entry point for the migrated script."""
    logger.info("Starting migrated script")

    {LOGIC_PLACEHOLDER}
    pass
"#
    )
}
