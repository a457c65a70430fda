//! Analysis, conversion and generation engine for script migration.
//!
//! - [`analyzer`] walks a repository, applies the exclusion policy and
//!   extracts functions, dependencies and descriptions from each script.
//! - [`converter`] rewrites shell and Perl text into draft Python through
//!   ordered, named regex rules, and scores migration complexity.
//! - [`generator`] renders skeleton Python tools (installer, build tool,
//!   performance tool) from typed templates.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::BTreeSet;
//! use std::path::Path;
//!
//! use script_migrate_core::ScriptType;
//! use script_migrate_engine::analyzer::analyze_repository;
//! use script_migrate_engine::converter::convert;
//!
//! let types = BTreeSet::from([ScriptType::Shell]);
//! for script in analyze_repository(Path::new("openssl-tools"), &types)? {
//!     let content = std::fs::read_to_string(&script.path)?;
//!     let python = convert(&content, &script.name, script.script_type)?;
//!     println!("{} -> {} bytes of Python", script.name, python.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analyzer;
pub mod converter;
pub mod error;
pub mod generator;

pub use error::{EngineError, Result};
