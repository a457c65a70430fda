//! Output formatting for migration plans.

use crate::plan::MigrationPlan;

/// Supported plan output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Json,
    Yaml,
    Markdown,
}

impl PlanFormat {
    /// File extension conventionally used for the format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Markdown => "md",
        }
    }
}

/// Formats a plan in the requested output format.
pub fn format_plan(plan: &MigrationPlan, format: PlanFormat) -> Result<String, String> {
    match format {
        PlanFormat::Json => serde_json::to_string_pretty(plan)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        PlanFormat::Yaml => {
            serde_yaml::to_string(plan).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        PlanFormat::Markdown => Ok(plan_to_markdown(plan)),
    }
}

fn plan_to_markdown(plan: &MigrationPlan) -> String {
    let mut out = String::new();

    out.push_str("# Migration Plan\n\n");
    out.push_str(&format!("**Total Scripts:** {}\n\n", plan.total_scripts));

    if !plan.by_type.is_empty() {
        out.push_str("## Scripts by Type\n\n");
        out.push_str("| Type | Count | Estimated Effort |\n");
        out.push_str("|------|-------|------------------|\n");
        for (script_type, names) in &plan.by_type {
            let effort = plan
                .estimated_effort
                .get(script_type)
                .map(String::as_str)
                .unwrap_or("-");
            out.push_str(&format!("| {script_type} | {} | {effort} |\n", names.len()));
        }
        out.push('\n');
    }

    if !plan.dependencies.is_empty() {
        out.push_str("## Dependencies\n\n");
        for dep in &plan.dependencies {
            out.push_str(&format!("- `{dep}`\n"));
        }
        out.push('\n');
    }

    out.push_str("## Recommendations\n\n");
    for rec in &plan.recommendations {
        out.push_str(&format!("- {rec}\n"));
    }

    if let Some(scripts) = &plan.scripts {
        out.push_str("\n## Scripts\n");
        for script in scripts {
            out.push_str(&format!("\n### {}\n\n", script.name));
            out.push_str(&format!("- **Path:** {}\n", script.path.display()));
            out.push_str(&format!("- **Type:** {}\n", script.script_type));
            out.push_str(&format!("- **Lines:** {}\n", script.lines));
            if let Some(desc) = &script.description {
                out.push_str(&format!("- **Description:** {desc}\n"));
            }
            if !script.functions.is_empty() {
                out.push_str(&format!("- **Functions:** {}\n", script.functions.join(", ")));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::generate_plan;
    use script_migrate_core::{ScriptInfo, ScriptType};

    fn plan() -> MigrationPlan {
        let mut script = ScriptInfo::new("util/mkdef.pl", ScriptType::Perl);
        script.lines = 120;
        script.functions = vec!["parse".into()];
        script.dependencies = ["File::Copy".to_string()].into();
        generate_plan(&[script], true)
    }

    #[test]
    fn test_format_plan_json() {
        let result = format_plan(&plan(), PlanFormat::Json).unwrap();
        assert!(result.contains("\"total_scripts\": 1"));
        assert!(result.contains("\"perl\""));
        assert!(result.contains("\"name\": \"mkdef.pl\""));
    }

    #[test]
    fn test_format_plan_yaml() {
        let result = format_plan(&plan(), PlanFormat::Yaml).unwrap();
        assert!(result.contains("total_scripts: 1"));
        assert!(result.contains("3 hours (high complexity)"));
    }

    #[test]
    fn test_format_plan_markdown() {
        let result = format_plan(&plan(), PlanFormat::Markdown).unwrap();
        assert!(result.starts_with("# Migration Plan\n"));
        assert!(result.contains("| perl | 1 | 3 hours (high complexity) |"));
        assert!(result.contains("- `File::Copy`"));
        assert!(result.contains("### mkdef.pl"));
        assert!(result.contains("- **Functions:** parse"));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(PlanFormat::Json.extension(), "json");
        assert_eq!(PlanFormat::Yaml.extension(), "yaml");
        assert_eq!(PlanFormat::Markdown.extension(), "md");
    }
}
