//! Migration plans: per-type grouping, effort estimates and recommendations.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use script_migrate_core::{ScriptInfo, ScriptType};
use serde::Serialize;

/// Summary of what a migration of the analyzed scripts would involve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationPlan {
    pub total_scripts: usize,
    /// Script names grouped by type, in analysis order.
    pub by_type: BTreeMap<ScriptType, Vec<String>>,
    pub estimated_effort: BTreeMap<ScriptType, String>,
    /// Union of every script's dependencies.
    pub dependencies: BTreeSet<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<Vec<PlannedScript>>,
}

/// Per-script detail carried by detailed plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedScript {
    pub name: String,
    pub path: PathBuf,
    pub script_type: ScriptType,
    pub size: u64,
    pub lines: usize,
    pub functions: Vec<String>,
    pub dependencies: BTreeSet<String>,
    pub description: Option<String>,
}

impl From<&ScriptInfo> for PlannedScript {
    fn from(script: &ScriptInfo) -> Self {
        Self {
            name: script.name.clone(),
            path: script.path.clone(),
            script_type: script.script_type,
            size: script.size,
            lines: script.lines,
            functions: script.functions.clone(),
            dependencies: script.dependencies.clone(),
            description: script.description.clone(),
        }
    }
}

/// Estimated hours of work for `count` scripts of one type.
pub fn estimate_effort(script_type: ScriptType, count: usize) -> String {
    match script_type {
        ScriptType::Shell => format!("{} hours (medium complexity)", count * 2),
        ScriptType::Perl => format!("{} hours (high complexity)", count * 3),
        ScriptType::Python => format!("{count} hours (low complexity - modernization)"),
    }
}

/// Builds a plan over `scripts`. Pure: the same scripts always give the same
/// plan.
pub fn generate_plan(scripts: &[ScriptInfo], include_scripts: bool) -> MigrationPlan {
    let mut by_type: BTreeMap<ScriptType, Vec<String>> = BTreeMap::new();
    let mut dependencies = BTreeSet::new();
    for script in scripts {
        by_type
            .entry(script.script_type)
            .or_default()
            .push(script.name.clone());
        dependencies.extend(script.dependencies.iter().cloned());
    }

    let estimated_effort = by_type
        .iter()
        .map(|(script_type, names)| (*script_type, estimate_effort(*script_type, names.len())))
        .collect();

    let mut recommendations = Vec::new();
    if by_type.contains_key(&ScriptType::Shell) {
        recommendations
            .push("Shell scripts should be converted to use subprocess for external commands".to_string());
    }
    if by_type.contains_key(&ScriptType::Perl) {
        recommendations
            .push("Perl scripts should be converted to use appropriate Python libraries".to_string());
    }
    recommendations.push("All scripts should use pathlib for file operations".to_string());
    recommendations.push("CLI scripts should use click for command-line interfaces".to_string());

    MigrationPlan {
        total_scripts: scripts.len(),
        by_type,
        estimated_effort,
        dependencies,
        recommendations,
        scripts: include_scripts.then(|| scripts.iter().map(PlannedScript::from).collect()),
    }
}
