//! Installer script migration.
//!
//! Picks the shell and Perl scripts whose names look installer-related,
//! converts them with the rule-based converter and adds installer helpers
//! (download, extract, dependency checks, OpenSSL build and verify). Conan
//! and Docker helper blocks are optional. Output mirrors the source layout
//! under the target directory and is marked executable.
//!
//! The migrator can also generate a fresh click-based installer and lay out
//! a pip-installable package around it.

mod snippets;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use script_migrate_core::{ScriptInfo, ScriptType};
use script_migrate_engine::analyzer::analyze_repository;
use script_migrate_engine::converter::convert;
use script_migrate_engine::generator::snippets::RUN_COMMAND;
use script_migrate_engine::generator::{Archetype, GeneratorConfig, PythonGenerator};
use serde::Serialize;
use tracing::{error, info};

use crate::error::Result;

pub use snippets::{
    CONAN_INTEGRATION, DOCKER_SUPPORT, INSTALLER_HELPERS, PACKAGE_DOCKERFILE, PACKAGE_README,
    PACKAGE_REQUIREMENTS, PACKAGE_SETUP_PY,
};

/// File name of the generated installer under the target directory.
pub const MODERN_INSTALLER_FILE: &str = "openssl_installer.py";

/// Directory name of the installer package under the target directory.
pub const PACKAGE_DIR_NAME: &str = "openssl-installer-package";

/// Directories created inside an installer package.
pub const PACKAGE_DIRECTORIES: &[&str] = &["src/openssl_installer", "tests", "docs", "scripts", "docker"];

const MODERN_INSTALLER_NAME: &str = "OpenSSL Installer";
const MODERN_INSTALLER_DESCRIPTION: &str =
    "Modern Python-based OpenSSL installer with enhanced features";

/// Lowercased name fragments marking a script as installer-related.
pub const INSTALLER_KEYWORDS: &[&str] = &[
    "install",
    "setup",
    "configure",
    "build",
    "make",
    "package",
    "distribute",
    "deploy",
    "uninstall",
];

/// Settings for an installer migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    pub source_repo: PathBuf,
    pub target_dir: PathBuf,
    pub add_conan_integration: bool,
    pub add_docker_support: bool,
}

impl InstallerConfig {
    pub fn new(source_repo: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_repo: source_repo.into(),
            target_dir: target_dir.into(),
            add_conan_integration: false,
            add_docker_support: false,
        }
    }
}

/// Counts returned by [`InstallerMigrator::migrate_installer_scripts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InstallerSummary {
    pub total: usize,
    pub migrated: usize,
    pub failed: usize,
}

/// Returns `true` if the file name contains an installer keyword.
pub fn is_installer_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    INSTALLER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Inserts `block` ahead of the module's click entry point, or ahead of
/// `def main(` when there is no decorator, or at the end otherwise.
pub fn insert_before_main(code: &str, block: &str) -> String {
    let anchor = code
        .rfind("@click.command()")
        .or_else(|| code.rfind("def main("));
    match anchor {
        Some(pos) => format!("{}{block}\n\n{}", &code[..pos], &code[pos..]),
        None => format!("{code}\n{block}"),
    }
}

#[derive(Debug)]
pub struct InstallerMigrator {
    config: InstallerConfig,
}

impl InstallerMigrator {
    /// Creates a migrator, creating the target directory.
    pub fn new(config: InstallerConfig) -> Result<Self> {
        fs::create_dir_all(&config.target_dir)?;
        info!(
            source = %config.source_repo.display(),
            "Initialized installer migrator"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Analyzes the source repository and keeps the installer scripts.
    pub fn find_installer_scripts(&self) -> Result<Vec<ScriptInfo>> {
        let types = BTreeSet::from([ScriptType::Shell, ScriptType::Perl]);
        let scripts = analyze_repository(&self.config.source_repo, &types)?;
        Ok(scripts
            .into_iter()
            .filter(|script| is_installer_name(&script.name))
            .collect())
    }

    /// Target of `script`: its path relative to the source repository, with
    /// a `.py` extension, under the target directory.
    pub fn target_path(&self, script: &ScriptInfo) -> PathBuf {
        let relative = script
            .path
            .strip_prefix(&self.config.source_repo)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(&script.name));
        self.config.target_dir.join(relative.with_extension("py"))
    }

    /// Python text for one installer script.
    pub fn render(&self, content: &str, script: &ScriptInfo) -> Result<String> {
        let converted = convert(content, &script.name, script.script_type)?;
        let helpers = format!("{INSTALLER_HELPERS}\n\n{RUN_COMMAND}\n");
        let mut code = insert_before_main(&converted, &helpers);
        if self.config.add_conan_integration {
            code = insert_before_main(&code, CONAN_INTEGRATION);
        }
        if self.config.add_docker_support {
            code = insert_before_main(&code, DOCKER_SUPPORT);
        }
        Ok(code)
    }

    /// Migrates one installer script and returns where it was written.
    pub fn migrate_installer_script(&self, script: &ScriptInfo) -> Result<PathBuf> {
        info!(script = %script.name, "Migrating installer script");
        let bytes = fs::read(&script.path)?;
        let content = String::from_utf8_lossy(&bytes);
        let code = self.render(&content, script)?;

        let target = self.target_path(script);
        write_file(&target, &code)?;
        make_executable(&target)?;

        info!(target = %target.display(), "Successfully migrated installer script");
        Ok(target)
    }

    /// Migrates every installer script in the source repository.
    ///
    /// Per-script failures are logged and counted; only a failed analysis
    /// aborts the run.
    pub fn migrate_installer_scripts(&self) -> Result<InstallerSummary> {
        info!("Starting installer migration");
        let scripts = self.find_installer_scripts()?;
        let mut summary = InstallerSummary {
            total: scripts.len(),
            ..InstallerSummary::default()
        };

        for script in &scripts {
            match self.migrate_installer_script(script) {
                Ok(_) => summary.migrated += 1,
                Err(err) => {
                    error!(script = %script.name, "Failed to migrate installer script: {err}");
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Installer migration completed: {} successful, {} failed",
            summary.migrated, summary.failed
        );
        Ok(summary)
    }

    /// Writes a freshly generated click installer to `output_path` and marks
    /// it executable.
    pub fn generate_modern_installer(&self, output_path: &Path) -> Result<()> {
        info!(output = %output_path.display(), "Generating modern OpenSSL installer");
        write_file(output_path, &modern_installer_code())?;
        make_executable(output_path)?;
        info!("Modern installer generated successfully");
        Ok(())
    }

    /// Lays out a pip-installable installer package in `package_dir`:
    /// `setup.py`, `requirements.txt`, `README.md`, `docker/Dockerfile` and
    /// an `openssl_installer` module whose `cli.py` is the generated
    /// installer.
    pub fn create_installer_package(&self, package_dir: &Path) -> Result<()> {
        info!(package = %package_dir.display(), "Creating installer package");
        for directory in PACKAGE_DIRECTORIES {
            fs::create_dir_all(package_dir.join(directory))?;
        }

        write_file(&package_dir.join("setup.py"), PACKAGE_SETUP_PY)?;
        write_file(&package_dir.join("requirements.txt"), PACKAGE_REQUIREMENTS)?;
        write_file(&package_dir.join("README.md"), PACKAGE_README)?;
        write_file(&package_dir.join("docker").join("Dockerfile"), PACKAGE_DOCKERFILE)?;

        let module = package_dir.join("src").join("openssl_installer");
        write_file(
            &module.join("__init__.py"),
            &format!("\"\"\"{MODERN_INSTALLER_DESCRIPTION}.\"\"\"\n"),
        )?;
        write_file(&module.join("cli.py"), &modern_installer_code())?;

        info!("Installer package created successfully");
        Ok(())
    }
}

fn modern_installer_code() -> String {
    let config = GeneratorConfig {
        name: Some(MODERN_INSTALLER_NAME.to_string()),
        description: Some(MODERN_INSTALLER_DESCRIPTION.to_string()),
    };
    PythonGenerator::new().generate(Archetype::Installer, &config)
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
