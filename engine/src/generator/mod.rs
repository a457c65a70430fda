//! Skeleton Python tool generation from typed templates.
//!
//! Each [`Archetype`] maps to a static [`ScriptTemplate`] describing the
//! sections of the generated module: extra imports, click options, the
//! `main` signature, log messages, archetype-specific functions and the body
//! run inside `main`. Rendering substitutes explicit [`TemplateParams`]; the
//! output is a pure function of the archetype and parameters.
//!
//! ```
//! use script_migrate_engine::generator::{Archetype, GeneratorConfig, PythonGenerator};
//!
//! let code = PythonGenerator::new().generate(Archetype::BuildTool, &GeneratorConfig::default());
//! assert!(code.contains("def build_openssl(config: Config) -> Result:"));
//! assert!(code.contains("@click.option('--parallel', '-j', default=4"));
//! ```

pub mod snippets;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineError;

/// Kind of Python tool to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    #[cfg_attr(feature = "clap", value(name = "installer"))]
    Installer,
    #[cfg_attr(feature = "clap", value(name = "build_tool"))]
    BuildTool,
    #[cfg_attr(feature = "clap", value(name = "performance_tool"))]
    PerformanceTool,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [
        Archetype::Installer,
        Archetype::BuildTool,
        Archetype::PerformanceTool,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Installer => "installer",
            Self::BuildTool => "build_tool",
            Self::PerformanceTool => "performance_tool",
        }
    }

    pub fn template(self) -> &'static ScriptTemplate {
        match self {
            Self::Installer => &INSTALLER,
            Self::BuildTool => &BUILD_TOOL,
            Self::PerformanceTool => &PERFORMANCE_TOOL,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Archetype {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|archetype| archetype.label() == s.trim())
            .ok_or_else(|| EngineError::UnknownArchetype(s.to_string()))
    }
}

/// Explicit substitution parameters for [`ScriptTemplate::render`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateParams<'a> {
    /// Tool title, used in the module docstring and `main` docstring.
    pub name: &'a str,
    /// One-line purpose shown under the title.
    pub description: &'a str,
}

/// Section layout of one generated tool.
#[derive(Debug)]
pub struct ScriptTemplate {
    pub archetype: Archetype,
    pub default_name: &'static str,
    pub default_description: &'static str,
    /// Imports added after the shared standard imports.
    pub extra_imports: &'static [&'static str],
    /// `@click.option(...)` lines, in declaration order.
    pub options: &'static [&'static str],
    /// Parameter list of `main`.
    pub signature: &'static str,
    pub start_message: &'static str,
    /// Prefix of the error logged when `main` raises.
    pub failure_label: &'static str,
    pub success_message: &'static str,
    /// Whether `main` returns early under `--dry-run`.
    pub dry_run_guard: bool,
    /// Archetype-specific function definitions.
    pub functions: &'static str,
    /// Statements run inside `main`'s `try` block, indented eight spaces.
    pub main_body: &'static str,
}

impl ScriptTemplate {
    /// Renders the complete Python module.
    pub fn render(&self, params: &TemplateParams<'_>) -> String {
        let TemplateParams { name, description } = *params;

        let imports = snippets::STANDARD_IMPORTS
            .iter()
            .chain(self.extra_imports)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
        let options = self.options.join("\n");
        let functions = [
            snippets::RUN_COMMAND,
            snippets::SAFE_REMOVE,
            snippets::ENSURE_DIRECTORY,
            self.functions,
        ]
        .join("\n\n\n");
        let dry_run = if self.dry_run_guard {
            "\n    if dry_run:\n        logger.info(\"Dry run mode - no changes will be made\")\n        return\n"
        } else {
            ""
        };

        format!(
            r#"#!/usr/bin/env python3
"""
{name}

{description}
Follows the Way of Python: Beautiful, Explicit, Simple.
"""

{imports}

{logging}


{config_class}


{result_class}


{functions}


@click.command()
{options}
def main({signature}):
    """
    Main entry point for {name}.
    """
    if verbose:
        logging.getLogger().setLevel(logging.DEBUG)

    logger.info("{start}")
{dry_run}
    try:
{body}

    except Exception as e:
        logger.error(f"{failure} failed: {{e}}")
        sys.exit(1)

    logger.info("{success}")


if __name__ == '__main__':
    main()
"#,
            logging = snippets::LOGGING_SETUP,
            config_class = snippets::CONFIG_CLASS,
            result_class = snippets::RESULT_CLASS,
            signature = self.signature,
            start = self.start_message,
            failure = self.failure_label,
            success = self.success_message,
            body = self.main_body,
        )
    }
}

pub static INSTALLER: ScriptTemplate = ScriptTemplate {
    archetype: Archetype::Installer,
    default_name: "OpenSSL Installer",
    default_description: "Modern Python implementation of OpenSSL installation utilities.",
    extra_imports: &[],
    options: &[
        "@click.option('--prefix', default='/usr/local', help='Installation prefix')",
        "@click.option('--config', help='Configuration file path')",
        "@click.option('--verbose', '-v', is_flag=True, help='Enable verbose output')",
        "@click.option('--dry-run', is_flag=True, help='Show what would be done without executing')",
    ],
    signature: "prefix: str, config: Optional[str], verbose: bool, dry_run: bool",
    start_message: "Starting OpenSSL installation",
    failure_label: "Installation",
    success_message: "Installation completed successfully",
    dry_run_guard: true,
    functions: snippets::INSTALLER_FUNCTIONS,
    main_body: snippets::INSTALLER_MAIN,
};

pub static BUILD_TOOL: ScriptTemplate = ScriptTemplate {
    archetype: Archetype::BuildTool,
    default_name: "OpenSSL Build Tool",
    default_description: "Modern Python implementation of OpenSSL build utilities.",
    extra_imports: snippets::CONCURRENT_IMPORTS,
    options: &[
        "@click.option('--config', help='Build configuration file')",
        "@click.option('--parallel', '-j', default=4, help='Number of parallel jobs')",
        "@click.option('--verbose', '-v', is_flag=True, help='Enable verbose output')",
        "@click.option('--clean', is_flag=True, help='Clean build directory before building')",
    ],
    signature: "config: Optional[str], parallel: int, verbose: bool, clean: bool",
    start_message: "Starting OpenSSL build",
    failure_label: "Build",
    success_message: "Build completed successfully",
    dry_run_guard: false,
    functions: snippets::BUILD_FUNCTIONS,
    main_body: snippets::BUILD_MAIN,
};

pub static PERFORMANCE_TOOL: ScriptTemplate = ScriptTemplate {
    archetype: Archetype::PerformanceTool,
    default_name: "OpenSSL Performance Tool",
    default_description: "Modern Python implementation of OpenSSL performance utilities.",
    extra_imports: snippets::PERFORMANCE_IMPORTS,
    options: &[
        "@click.option('--benchmark', help='Benchmark to run')",
        "@click.option('--iterations', default=1000, help='Number of iterations')",
        "@click.option('--output', help='Output file for results')",
        "@click.option('--verbose', '-v', is_flag=True, help='Enable verbose output')",
    ],
    signature: "benchmark: Optional[str], iterations: int, output: Optional[str], verbose: bool",
    start_message: "Starting OpenSSL performance benchmark",
    failure_label: "Performance test",
    success_message: "Performance test completed successfully",
    dry_run_guard: false,
    functions: snippets::PERFORMANCE_FUNCTIONS,
    main_body: snippets::PERFORMANCE_MAIN,
};

/// Caller-supplied overrides for a generated tool.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Generates skeleton Python tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonGenerator;

impl PythonGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Renders the template for `archetype`, filling in defaults for any
    /// missing name or description.
    pub fn generate(&self, archetype: Archetype, config: &GeneratorConfig) -> String {
        let template = archetype.template();
        let params = TemplateParams {
            name: config.name.as_deref().unwrap_or(template.default_name),
            description: config
                .description
                .as_deref()
                .unwrap_or(template.default_description),
        };
        info!(archetype = %archetype, name = params.name, "Generating Python tool");
        template.render(&params)
    }

    /// Generates a tool from an archetype label such as `"build_tool"`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownArchetype`] for an unrecognized label.
    pub fn generate_custom_script(
        &self,
        archetype: &str,
        config: &GeneratorConfig,
    ) -> Result<String, EngineError> {
        let archetype = archetype.parse::<Archetype>()?;
        Ok(self.generate(archetype, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(archetype: Archetype) -> String {
        PythonGenerator::new().generate(archetype, &GeneratorConfig::default())
    }

    #[test]
    fn test_every_archetype_has_click_main() {
        for archetype in Archetype::ALL {
            let code = render(archetype);
            assert!(code.starts_with("#!/usr/bin/env python3\n"));
            assert!(code.contains("@click.command()\n@click.option("));
            assert!(code.contains("def main("));
            assert!(code.contains("if __name__ == '__main__':\n    main()\n"));
            assert!(code.contains("def run_command("));
            assert!(code.contains("class Config:"));
            assert!(code.contains("class Result:"));
            assert_eq!(archetype.template().archetype, archetype);
        }
    }

    #[test]
    fn test_snippet_braces_are_single() {
        for archetype in Archetype::ALL {
            let code = render(archetype);
            assert!(!code.contains("{{"), "{archetype} output has doubled braces");
            assert!(code.contains("{e}"));
        }
    }

    #[test]
    fn test_main_body_is_rendered() {
        let code = render(Archetype::Installer);
        assert!(code.contains("        install_result = install_openssl(Path(prefix), app_config)"));
        assert!(code.contains("if dry_run:\n        logger.info(\"Dry run mode"));

        let build = render(Archetype::BuildTool);
        assert!(build.contains("build_result = build_openssl(app_config)"));
        assert!(!build.contains("if dry_run:"));
        assert!(build.contains("from concurrent.futures import ThreadPoolExecutor"));
    }

    #[test]
    fn test_performance_imports_and_options() {
        let code = render(Archetype::PerformanceTool);
        assert!(code.contains("import statistics"));
        assert!(code.contains("import json"));
        assert!(code.contains("--iterations', default=1000"));
        assert!(code.contains("def calculate_statistics("));
    }

    #[test]
    fn test_params_override_defaults() {
        let config = GeneratorConfig {
            name: Some("Cert Installer".into()),
            description: Some("Installs test certificates.".into()),
        };
        let code = PythonGenerator::new().generate(Archetype::Installer, &config);
        assert!(code.contains("\"\"\"\nCert Installer\n\nInstalls test certificates.\n"));
        assert!(code.contains("Main entry point for Cert Installer."));
        assert!(!code.contains("OpenSSL Installer"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(render(Archetype::BuildTool), render(Archetype::BuildTool));
    }

    #[test]
    fn test_archetype_parsing() {
        assert_eq!("installer".parse::<Archetype>().unwrap(), Archetype::Installer);
        assert_eq!(
            "performance_tool".parse::<Archetype>().unwrap(),
            Archetype::PerformanceTool
        );
        let err = PythonGenerator::new()
            .generate_custom_script("deployer", &GeneratorConfig::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownArchetype(ref s) if s == "deployer"));
    }
}
