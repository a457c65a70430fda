//! Repository-wide migration of legacy shell and Perl scripts to Python.
//!
//! [`MigrationFramework`] holds a run: it analyzes a repository, plans the
//! migration, writes one Python module per pending script and reports the
//! outcome. [`installer::InstallerMigrator`] is a specialized pass for
//! installer scripts that converts their bodies and adds build helpers.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use script_migrate_core::MigrationConfig;
//! use script_migrate_framework::MigrationFramework;
//!
//! let config = MigrationConfig::new("openssl", "migrated");
//! let mut framework = MigrationFramework::new(config)?;
//! framework.analyze_repository(Path::new("openssl"))?;
//! let summary = framework.migrate_all();
//! framework.save_report(None)?;
//! println!("{} of {} scripts migrated", summary.completed, summary.total);
//! # Ok::<(), script_migrate_framework::MigrateError>(())
//! ```

pub mod codegen;
pub mod error;
pub mod framework;
pub mod installer;
pub mod output;
pub mod plan;
pub mod report;

pub use error::{MigrateError, Result};
pub use framework::{MigrationFramework, REPORT_FILE_NAME};
pub use output::{PlanFormat, format_plan};
pub use plan::{MigrationPlan, PlannedScript, generate_plan};
pub use report::MigrationSummary;
