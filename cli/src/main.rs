use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use script_migrate_core::{DEFAULT_TARGET_DIR, MigrationConfig, OutputFormat, ScriptType};
use script_migrate_engine::analyzer::analyze_repository;
use script_migrate_engine::converter::{analyze_script_complexity, convert, suggest_improvements};
use script_migrate_engine::generator::{Archetype, GeneratorConfig, PythonGenerator};
use script_migrate_framework::installer::{
    InstallerConfig, InstallerMigrator, MODERN_INSTALLER_FILE, PACKAGE_DIR_NAME,
};
use script_migrate_framework::{
    MigrationFramework, MigrationSummary, PlanFormat, format_plan, generate_plan,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// CLI-specific script type enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliScriptType {
    Shell,
    Perl,
    Python,
}

impl From<CliScriptType> for ScriptType {
    fn from(script_type: CliScriptType) -> Self {
        match script_type {
            CliScriptType::Shell => Self::Shell,
            CliScriptType::Perl => Self::Perl,
            CliScriptType::Python => Self::Python,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliOutputFormat {
    Modern,
    Compatible,
    Minimal,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Modern => Self::Modern,
            CliOutputFormat::Compatible => Self::Compatible,
            CliOutputFormat::Minimal => Self::Minimal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliPlanFormat {
    Json,
    Yaml,
    Markdown,
}

impl From<CliPlanFormat> for PlanFormat {
    fn from(fmt: CliPlanFormat) -> Self {
        match fmt {
            CliPlanFormat::Json => Self::Json,
            CliPlanFormat::Yaml => Self::Yaml,
            CliPlanFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "script-migrate", version)]
#[command(about = "Migrate legacy shell and Perl scripts to Python")]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
    /// YAML file supplying the run configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a repository and print a migration plan.
    Analyze(AnalyzeArgs),
    /// Migrate every discovered script to Python.
    Migrate(MigrateArgs),
    /// Convert a single script with the rule-based converter.
    Convert(ConvertArgs),
    /// Generate a new Python tool from a template.
    Generate(GenerateArgs),
    /// Write a detailed migration plan to a file.
    Plan(PlanArgs),
    /// Migrate installer scripts, adding build and install helpers.
    MigrateInstaller(MigrateInstallerArgs),
    /// Migrate several repositories, each into its own target directory.
    MigrateAll(MigrateAllArgs),
}

/// Options shared by `analyze` and `migrate`.
#[derive(Debug, Args)]
struct RunArgs {
    /// Directory for migrated scripts (default: ./migrated).
    #[arg(short = 't', long)]
    target_dir: Option<PathBuf>,
    /// Comma-separated script types to migrate.
    #[arg(long, value_enum, value_delimiter = ',', default_values = ["shell", "perl"])]
    script_types: Vec<CliScriptType>,
    /// Mirror each script's parent directory under the target.
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    preserve_structure: bool,
    /// Add test files for migrated scripts.
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    add_tests: bool,
    /// Add documentation for migrated scripts.
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    add_docs: bool,
    /// Generate click-based entry points.
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    use_click: bool,
    /// Prefer pathlib for file operations.
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    use_pathlib: bool,
    /// Prefer subprocess for external commands.
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    use_subprocess: bool,
    /// Style of generated code.
    #[arg(long, value_enum, default_value = "modern")]
    output_format: CliOutputFormat,
}

impl RunArgs {
    /// Builds the run configuration. A `--config` file replaces the flags,
    /// except that the source repository and an explicit `--target-dir`
    /// always apply.
    fn to_config(&self, source_repo: &Path, config_file: Option<&Path>) -> Result<MigrationConfig, String> {
        let mut config = match config_file {
            Some(path) => load_config(path)?,
            None => MigrationConfig {
                source_repo: PathBuf::new(),
                target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
                script_types: self.script_types.iter().map(|&t| t.into()).collect(),
                preserve_structure: self.preserve_structure,
                add_tests: self.add_tests,
                add_documentation: self.add_docs,
                use_click: self.use_click,
                use_pathlib: self.use_pathlib,
                use_subprocess: self.use_subprocess,
                output_format: self.output_format.into(),
            },
        };
        config.source_repo = source_repo.to_path_buf();
        if let Some(target_dir) = &self.target_dir {
            config.target_dir = target_dir.clone();
        }
        Ok(config)
    }
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Repository to analyze.
    source_repo: PathBuf,
    #[command(flatten)]
    run: RunArgs,
    /// Print the analysis without saving a report.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Args)]
struct MigrateArgs {
    /// Repository to migrate.
    source_repo: PathBuf,
    #[command(flatten)]
    run: RunArgs,
    /// Show what would be migrated without writing anything.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Script to convert.
    script_path: PathBuf,
    /// Script type (detected from the file extension when omitted).
    #[arg(long, value_enum)]
    script_type: Option<CliScriptType>,
    /// Output file (default: the input path with a .py extension).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print the converted code instead of writing it.
    #[arg(long)]
    dry_run: bool,
    /// Print improvement suggestions for the original script.
    #[arg(long)]
    suggest: bool,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Kind of tool to generate.
    #[arg(value_enum)]
    archetype: Archetype,
    /// Output file (default: <name>.py, or openssl_<kind>.py).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Tool name.
    #[arg(long)]
    name: Option<String>,
    /// Tool description.
    #[arg(long)]
    description: Option<String>,
    /// Print the generated code instead of writing it.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Args)]
struct PlanArgs {
    /// Repository to plan a migration for.
    source_repo: PathBuf,
    /// Output file (default: migration_plan.<format extension>).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: CliPlanFormat,
}

#[derive(Debug, Args)]
struct MigrateInstallerArgs {
    /// Repository holding the installer scripts.
    source_repo: PathBuf,
    /// Directory for migrated installers (default: ./migrated).
    #[arg(short = 't', long)]
    target_dir: Option<PathBuf>,
    /// Add Conan package manager helpers.
    #[arg(long)]
    conan: bool,
    /// Add Docker helpers.
    #[arg(long)]
    docker: bool,
    /// Also lay out a pip-installable installer package.
    #[arg(long)]
    create_package: bool,
    /// List the installer scripts without migrating them.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Args)]
struct MigrateAllArgs {
    /// Repositories to migrate (repeat the flag or separate with commas).
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    repos: Vec<PathBuf>,
    /// Base directory; each repository goes to <target-base>/<repo name>.
    #[arg(long, default_value = DEFAULT_TARGET_BASE)]
    target_base: PathBuf,
    /// YAML file supplying the run configuration (overrides --config).
    #[arg(long)]
    config_file: Option<PathBuf>,
    /// Show the target of each repository without migrating.
    #[arg(long)]
    dry_run: bool,
}

const DEFAULT_TARGET_BASE: &str = "migrated-repos";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_file = cli.config.as_deref();
    let result = match cli.command {
        Command::Analyze(args) => run_analyze(args, config_file, cli.verbose),
        Command::Migrate(args) => run_migrate(args, config_file),
        Command::Convert(args) => run_convert(args),
        Command::Generate(args) => run_generate(args),
        Command::Plan(args) => run_plan(args, config_file),
        Command::MigrateInstaller(args) => run_migrate_installer(args, config_file),
        Command::MigrateAll(args) => run_migrate_all(args, config_file),
    };

    if let Err(err) = result {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// ---------------------------------------------------------------------------
// analyze / migrate
// ---------------------------------------------------------------------------

fn run_analyze(args: AnalyzeArgs, config_file: Option<&Path>, verbose: bool) -> Result<(), String> {
    ensure_repository(&args.source_repo)?;
    let config = args.run.to_config(&args.source_repo, config_file)?;
    let mut framework = open_framework(config)?;

    let scripts = framework
        .analyze_repository(&args.source_repo)
        .map_err(|err| format!("Analysis failed: {err}"))?;
    if scripts.is_empty() {
        println!("No scripts found to migrate.");
        return Ok(());
    }

    let plan = framework.generate_migration_plan();
    println!("\n📊 Analysis Results:");
    println!("Total scripts found: {}", plan.total_scripts);
    for (script_type, names) in &plan.by_type {
        println!("  {script_type}: {} scripts", names.len());
    }

    println!("\n⏱️  Estimated effort:");
    for (script_type, effort) in &plan.estimated_effort {
        println!("  {script_type}: {effort}");
    }

    println!("\n💡 Recommendations:");
    for recommendation in &plan.recommendations {
        println!("  • {recommendation}");
    }

    if verbose {
        println!("\n📋 Detailed Script List:");
        for script in framework.scripts() {
            println!("  {} ({})", script.name, script.script_type);
            println!("    Size: {} bytes, Lines: {}", script.size, script.lines);
            if !script.functions.is_empty() {
                println!("    Functions: {}", script.functions.join(", "));
            }
            if !script.dependencies.is_empty() {
                let deps: Vec<&str> = script.dependencies.iter().take(5).map(String::as_str).collect();
                println!("    Dependencies: {}", deps.join(", "));
            }
            println!();
        }
    }

    if !args.dry_run {
        let report_path = framework
            .save_report(None)
            .map_err(|err| format!("Failed to save report: {err}"))?;
        println!("\n📄 Analysis report saved to: {}", report_path.display());
    }

    Ok(())
}

fn run_migrate(args: MigrateArgs, config_file: Option<&Path>) -> Result<(), String> {
    ensure_repository(&args.source_repo)?;
    let config = args.run.to_config(&args.source_repo, config_file)?;
    let mut framework = open_framework(config)?;

    let scripts = framework
        .analyze_repository(&args.source_repo)
        .map_err(|err| format!("Migration failed: {err}"))?;
    if scripts.is_empty() {
        println!("No scripts found to migrate.");
        return Ok(());
    }
    println!("Found {} scripts to migrate", scripts.len());

    if args.dry_run {
        println!("Dry run mode - showing what would be migrated:");
        for script in framework.scripts() {
            println!("  {} → {}", script.name, framework.target_path(script).display());
        }
        return Ok(());
    }

    let summary = framework.migrate_all();
    println!("\n✅ Migration completed:");
    println!("  Total: {}", summary.total);
    println!("  Completed: {}", summary.completed);
    println!("  Failed: {}", summary.failed);
    println!("  Skipped: {}", summary.skipped);

    let report_path = framework
        .save_report(None)
        .map_err(|err| format!("Failed to save report: {err}"))?;
    println!("\n📄 Migration report saved to: {}", report_path.display());

    if summary.has_failures() {
        return Err(format!(
            "{} scripts failed to migrate. Check the report for details.",
            summary.failed
        ));
    }
    Ok(())
}

fn open_framework(config: MigrationConfig) -> Result<MigrationFramework, String> {
    let target_dir = config.target_dir.clone();
    MigrationFramework::new(config).map_err(|err| {
        format!(
            "Failed to create target directory '{}': {err}",
            target_dir.display()
        )
    })
}

// ---------------------------------------------------------------------------
// convert / generate
// ---------------------------------------------------------------------------

fn run_convert(args: ConvertArgs) -> Result<(), String> {
    let bytes = fs::read(&args.script_path)
        .map_err(|err| format!("Failed to read '{}': {err}", args.script_path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let script_type = match args.script_type {
        Some(script_type) => script_type.into(),
        None => ScriptType::detect(&args.script_path).ok_or_else(|| {
            "Could not determine script type. Please specify --script-type".to_string()
        })?,
    };
    if script_type == ScriptType::Python {
        println!("Script is already Python; nothing to convert.");
        return Ok(());
    }

    let script_name = args
        .script_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let python_code = convert(&content, &script_name, script_type)
        .map_err(|err| format!("Conversion failed: {err}"))?;

    if args.dry_run {
        println!("Dry run mode - showing converted code:");
        println!("{python_code}");
    } else {
        let output = args
            .output
            .unwrap_or_else(|| args.script_path.with_extension("py"));
        fs::write(&output, &python_code)
            .map_err(|err| format!("Failed to write '{}': {err}", output.display()))?;
        println!("✅ Script converted successfully: {}", output.display());
    }

    let original_lines = content.lines().count();
    let converted_lines = python_code.lines().count();
    let complexity = analyze_script_complexity(&content, script_type);
    println!("📊 Conversion statistics:");
    println!("  Original lines: {original_lines}");
    println!("  Converted lines: {converted_lines}");
    if original_lines > 0 {
        println!(
            "  Expansion ratio: {:.2}x",
            converted_lines as f64 / original_lines as f64
        );
    }
    println!(
        "  Difficulty: {} (score {})",
        complexity.difficulty, complexity.complexity_score
    );

    if args.suggest {
        println!("\n💡 Suggestions:");
        for suggestion in suggest_improvements(&content, script_type) {
            println!("  • {suggestion}");
        }
    }

    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let config = GeneratorConfig {
        name: args.name.clone(),
        description: args.description,
    };
    let python_code = PythonGenerator::new().generate(args.archetype, &config);

    if args.dry_run {
        println!("Dry run mode - showing generated code:");
        println!("{python_code}");
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| default_generate_output(args.name.as_deref(), args.archetype));
    fs::write(&output, python_code)
        .map_err(|err| format!("Failed to write '{}': {err}", output.display()))?;
    make_executable(&output)
        .map_err(|err| format!("Failed to mark '{}' executable: {err}", output.display()))?;
    println!("✅ Script generated successfully: {}", output.display());
    Ok(())
}

fn default_generate_output(name: Option<&str>, archetype: Archetype) -> PathBuf {
    let stem = name
        .map(python_module_name)
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| format!("openssl_{}", archetype.label()));
    PathBuf::from(format!("{stem}.py"))
}

/// Lowercases `raw` and replaces anything that is not valid in a Python
/// module name with `_`.
fn python_module_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
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

// ---------------------------------------------------------------------------
// plan / migrate-installer
// ---------------------------------------------------------------------------

fn run_plan(args: PlanArgs, config_file: Option<&Path>) -> Result<(), String> {
    ensure_repository(&args.source_repo)?;
    let script_types: BTreeSet<ScriptType> = match config_file {
        Some(path) => load_config(path)?.script_types,
        None => ScriptType::ALL.into_iter().collect(),
    };

    let scripts = analyze_repository(&args.source_repo, &script_types)
        .map_err(|err| format!("Plan generation failed: {err}"))?;
    if scripts.is_empty() {
        println!("No scripts found to migrate.");
        return Ok(());
    }

    let format: PlanFormat = args.format.into();
    let plan = generate_plan(&scripts, true);
    let raw = format_plan(&plan, format)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("migration_plan.{}", format.extension())));
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Failed to create output directory '{}': {err}",
                    parent.display()
                )
            })?;
        }
    }
    fs::write(&output, raw)
        .map_err(|err| format!("Failed to write '{}': {err}", output.display()))?;
    println!("✅ Migration plan saved to: {}", output.display());

    println!("\n📊 Migration Plan Summary:");
    println!("  Total scripts: {}", plan.total_scripts);
    for (script_type, names) in &plan.by_type {
        println!("  {script_type}: {}", names.len());
    }
    Ok(())
}

fn run_migrate_installer(args: MigrateInstallerArgs, config_file: Option<&Path>) -> Result<(), String> {
    ensure_repository(&args.source_repo)?;
    let target_dir = match (args.target_dir, config_file) {
        (Some(target_dir), _) => target_dir,
        (None, Some(path)) => load_config(path)?.target_dir,
        (None, None) => PathBuf::from(DEFAULT_TARGET_DIR),
    };

    let mut config = InstallerConfig::new(&args.source_repo, &target_dir);
    config.add_conan_integration = args.conan;
    config.add_docker_support = args.docker;
    let migrator = InstallerMigrator::new(config).map_err(|err| {
        format!(
            "Failed to create target directory '{}': {err}",
            target_dir.display()
        )
    })?;

    if args.dry_run {
        let scripts = migrator
            .find_installer_scripts()
            .map_err(|err| format!("Installer migration failed: {err}"))?;
        println!("Dry run mode - {} installer scripts would be migrated:", scripts.len());
        for script in &scripts {
            println!("  {} → {}", script.name, migrator.target_path(script).display());
        }
        println!("  Modern installer → {}", target_dir.join(MODERN_INSTALLER_FILE).display());
        if args.create_package {
            println!("  Installer package → {}", target_dir.join(PACKAGE_DIR_NAME).display());
        }
        return Ok(());
    }

    let summary = migrator
        .migrate_installer_scripts()
        .map_err(|err| format!("Installer migration failed: {err}"))?;
    println!("\n✅ Installer migration completed:");
    println!("  Total: {}", summary.total);
    println!("  Migrated: {}", summary.migrated);
    println!("  Failed: {}", summary.failed);

    let installer_path = target_dir.join(MODERN_INSTALLER_FILE);
    migrator
        .generate_modern_installer(&installer_path)
        .map_err(|err| format!("Failed to generate modern installer: {err}"))?;
    println!("  Modern installer generated: {}", installer_path.display());

    if args.create_package {
        let package_dir = target_dir.join(PACKAGE_DIR_NAME);
        migrator
            .create_installer_package(&package_dir)
            .map_err(|err| format!("Failed to create installer package: {err}"))?;
        println!("  Installer package created: {}", package_dir.display());
    }

    if summary.failed > 0 {
        return Err(format!("{} installer scripts failed to migrate.", summary.failed));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// migrate-all
// ---------------------------------------------------------------------------

/// Outcome of one repository in a batch run.
enum RepoOutcome {
    Migrated(MigrationSummary),
    Error(String),
}

fn run_migrate_all(args: MigrateAllArgs, config_file: Option<&Path>) -> Result<(), String> {
    let config_file = args.config_file.as_deref().or(config_file);
    let base = match config_file {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    let mut results: Vec<(String, RepoOutcome)> = Vec::new();
    for repo in &args.repos {
        let name = repository_name(repo);
        if let Err(err) = ensure_repository(repo) {
            warn!("{err}");
            println!("⚠️  {err}");
            results.push((name, RepoOutcome::Error(err)));
            continue;
        }

        println!("\n🔄 Processing repository: {name}");
        let target_dir = args.target_base.join(&name);
        if args.dry_run {
            println!("  Dry run - would migrate to: {}", target_dir.display());
            continue;
        }

        let mut config = base
            .clone()
            .unwrap_or_else(|| MigrationConfig::new(repo, &target_dir));
        config.source_repo = repo.clone();
        config.target_dir = target_dir;

        match migrate_repository(repo, config) {
            Ok(summary) => {
                if summary.total == 0 {
                    println!("  ℹ️  No scripts found to migrate");
                } else {
                    println!("  ✅ Completed: {}", summary.completed);
                    println!("  ❌ Failed: {}", summary.failed);
                }
                results.push((name, RepoOutcome::Migrated(summary)));
            }
            Err(err) => {
                println!("  ❌ Failed: {err}");
                results.push((name, RepoOutcome::Error(err)));
            }
        }
    }

    if args.dry_run {
        return Ok(());
    }

    println!("\n📊 Batch Migration Summary:");
    let mut total_completed = 0;
    let mut total_failed = 0;
    let mut errors = 0;
    for (name, outcome) in &results {
        match outcome {
            RepoOutcome::Migrated(summary) => {
                total_completed += summary.completed;
                total_failed += summary.failed;
                println!(
                    "  {name}: ✅ {} completed, ❌ {} failed",
                    summary.completed, summary.failed
                );
            }
            RepoOutcome::Error(err) => {
                errors += 1;
                println!("  {name}: ❌ {err}");
            }
        }
    }

    println!("\n🎯 Overall Results:");
    println!("  Total completed: {total_completed}");
    println!("  Total failed: {total_failed}");

    if total_failed > 0 || errors > 0 {
        return Err(format!(
            "{total_failed} scripts failed to migrate and {errors} repositories could not be processed."
        ));
    }
    Ok(())
}

/// Analyzes and migrates one repository, then writes its report.
fn migrate_repository(repo: &Path, config: MigrationConfig) -> Result<MigrationSummary, String> {
    let mut framework = open_framework(config)?;
    let scripts = framework
        .analyze_repository(repo)
        .map_err(|err| format!("Analysis failed: {err}"))?;
    if scripts.is_empty() {
        return Ok(MigrationSummary::default());
    }
    let summary = framework.migrate_all();
    framework
        .save_report(None)
        .map_err(|err| format!("Failed to save report: {err}"))?;
    Ok(summary)
}

/// Last path component of `repo`, resolving `.` and similar through the
/// filesystem.
fn repository_name(repo: &Path) -> String {
    repo.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            fs::canonicalize(repo)
                .ok()
                .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| "repository".to_string())
}

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

fn ensure_repository(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Repository path does not exist: {}", path.display()));
    }
    if !path.is_dir() {
        return Err(format!("Repository path is not a directory: {}", path.display()));
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<MigrationConfig, String> {
    debug!(path = %path.display(), "Loading configuration");
    MigrationConfig::load(path)
        .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))
}
