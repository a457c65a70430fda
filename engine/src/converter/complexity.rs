//! Migration complexity scoring and improvement suggestions.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use script_migrate_core::ScriptType;
use serde::Serialize;

/// Scores below this are [`Difficulty::Low`].
pub const LOW_DIFFICULTY_LIMIT: usize = 10;
/// Scores below this (and not low) are [`Difficulty::Medium`].
pub const MEDIUM_DIFFICULTY_LIMIT: usize = 25;

/// Coarse migration difficulty derived from the complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    pub fn from_score(score: usize) -> Self {
        if score < LOW_DIFFICULTY_LIMIT {
            Self::Low
        } else if score < MEDIUM_DIFFICULTY_LIMIT {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Count of one language feature in a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCount {
    pub feature: &'static str,
    pub count: usize,
}

/// Result of [`analyze_script_complexity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityReport {
    /// Number of newline-separated segments.
    pub lines: usize,
    /// Size in characters.
    pub size: usize,
    pub features: Vec<FeatureCount>,
    /// Sum of all feature counts.
    pub complexity_score: usize,
    pub difficulty: Difficulty,
}

struct FeaturePattern {
    feature: &'static str,
    pattern: Regex,
}

impl FeaturePattern {
    fn new(feature: &'static str, pattern: &str) -> Self {
        Self {
            feature,
            pattern: Regex::new(pattern).expect("static regex must compile"),
        }
    }
}

static SHELL_FEATURES: LazyLock<Vec<FeaturePattern>> = LazyLock::new(|| {
    vec![
        FeaturePattern::new("functions", r"(\w+)\s*\(\s*\)\s*\{"),
        FeaturePattern::new("conditionals", r"if\s+\["),
        FeaturePattern::new("loops", r"for\s+\w+\s+in"),
        FeaturePattern::new("external_commands", r"(\w+)\s+"),
        FeaturePattern::new("command_substitution", r"\$\([^)]+\)"),
        FeaturePattern::new("variables", r"\$\w+"),
    ]
});

static PERL_FEATURES: LazyLock<Vec<FeaturePattern>> = LazyLock::new(|| {
    vec![
        FeaturePattern::new("subroutines", r"sub\s+\w+"),
        FeaturePattern::new("modules", r"use\s+[\w:]+"),
        FeaturePattern::new("conditionals", r"if\s*\("),
        FeaturePattern::new("loops", r"for\s*\("),
        FeaturePattern::new("file_operations", r"(open|close|read|write)"),
        FeaturePattern::new("variables", r"\$\w+"),
    ]
});

/// Measures how much work migrating `content` is likely to take.
///
/// Python scripts have no tracked features and always score zero.
pub fn analyze_script_complexity(content: &str, script_type: ScriptType) -> ComplexityReport {
    let patterns: &[FeaturePattern] = match script_type {
        ScriptType::Shell => SHELL_FEATURES.as_slice(),
        ScriptType::Perl => PERL_FEATURES.as_slice(),
        ScriptType::Python => &[],
    };

    let features: Vec<FeatureCount> = patterns
        .iter()
        .map(|tracked| FeatureCount {
            feature: tracked.feature,
            count: tracked.pattern.find_iter(content).count(),
        })
        .collect();
    let complexity_score: usize = features.iter().map(|f| f.count).sum();

    ComplexityReport {
        lines: content.split('\n').count(),
        size: content.chars().count(),
        features,
        complexity_score,
        difficulty: Difficulty::from_score(complexity_score),
    }
}

/// Suggestions appended for every script type.
pub const GENERAL_SUGGESTIONS: &[&str] = &[
    "Add proper error handling with try-except blocks",
    "Use type hints for better code documentation",
    "Add comprehensive logging instead of print statements",
    "Consider using dataclasses for structured data",
    "Add unit tests for the migrated functionality",
];

static SHELL_HINTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    hints(&[
        (
            r"rm\s+-rf",
            "Consider using Path.unlink() with proper error handling instead of rm -rf",
        ),
        (
            r"curl\s+",
            "Consider using requests library instead of curl for HTTP operations",
        ),
        (
            r"grep\s+",
            "Consider using re module for pattern matching instead of grep",
        ),
        (
            r"awk\s+",
            "Consider using pandas or built-in string methods instead of awk",
        ),
    ])
});

static PERL_HINTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    hints(&[
        (
            r#"open\s*\(\s*\w+,\s*["']<["']"#,
            "Consider using pathlib.Path for file operations",
        ),
        (
            r"print\s+",
            "Consider using logging instead of print statements",
        ),
        (
            r"Getopt::Long",
            "Consider using click for command-line argument parsing",
        ),
    ])
});

fn hints(raw: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    raw.iter()
        .map(|(pattern, text)| {
            (
                Regex::new(pattern).expect("static regex must compile"),
                *text,
            )
        })
        .collect()
}

/// Lists improvements worth making to the migrated script.
///
/// Pattern-triggered hints come first, followed by [`GENERAL_SUGGESTIONS`].
pub fn suggest_improvements(content: &str, script_type: ScriptType) -> Vec<String> {
    let hints: &[(Regex, &'static str)] = match script_type {
        ScriptType::Shell => SHELL_HINTS.as_slice(),
        ScriptType::Perl => PERL_HINTS.as_slice(),
        ScriptType::Python => &[],
    };

    hints
        .iter()
        .filter(|(pattern, _)| pattern.is_match(content))
        .map(|(_, text)| *text)
        .chain(GENERAL_SUGGESTIONS.iter().copied())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_low() {
        for script_type in ScriptType::ALL {
            let report = analyze_script_complexity("", script_type);
            assert_eq!(report.complexity_score, 0);
            assert_eq!(report.difficulty, Difficulty::Low);
            assert_eq!(report.lines, 1);
            assert_eq!(report.size, 0);
        }
    }

    #[test]
    fn test_score_is_sum_of_features() {
        let content = "build() {\n  if [ -f x ]; then\n    echo $(date)\n  fi\n}\n";
        let report = analyze_script_complexity(content, ScriptType::Shell);
        let sum: usize = report.features.iter().map(|f| f.count).sum();
        assert_eq!(report.complexity_score, sum);
        let count = |name: &str| {
            report
                .features
                .iter()
                .find(|f| f.feature == name)
                .map(|f| f.count)
                .unwrap()
        };
        assert_eq!(count("functions"), 1);
        assert_eq!(count("conditionals"), 1);
        assert_eq!(count("command_substitution"), 1);
    }

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(Difficulty::from_score(9), Difficulty::Low);
        assert_eq!(Difficulty::from_score(10), Difficulty::Medium);
        assert_eq!(Difficulty::from_score(24), Difficulty::Medium);
        assert_eq!(Difficulty::from_score(25), Difficulty::High);
    }

    #[test]
    fn test_python_has_no_features() {
        let report = analyze_script_complexity("import os\nif x:\n    pass\n", ScriptType::Python);
        assert!(report.features.is_empty());
        assert_eq!(report.complexity_score, 0);
    }

    #[test]
    fn test_perl_features() {
        let content = "use strict;\nsub run {\n  open(FH, '<', $file);\n}\n";
        let report = analyze_script_complexity(content, ScriptType::Perl);
        let names: Vec<&str> = report.features.iter().map(|f| f.feature).collect();
        assert_eq!(
            names,
            vec![
                "subroutines",
                "modules",
                "conditionals",
                "loops",
                "file_operations",
                "variables"
            ]
        );
        assert_eq!(report.features[0].count, 1);
        assert_eq!(report.features[4].count, 1);
    }

    #[test]
    fn test_shell_suggestions_precede_general_ones() {
        let suggestions = suggest_improvements("rm -rf build\ncurl -O url\n", ScriptType::Shell);
        assert_eq!(suggestions.len(), 2 + GENERAL_SUGGESTIONS.len());
        assert!(suggestions[0].contains("rm -rf"));
        assert!(suggestions[1].contains("requests"));
        assert_eq!(suggestions[2], GENERAL_SUGGESTIONS[0]);
    }

    #[test]
    fn test_perl_suggestions() {
        let content = "use Getopt::Long;\nopen(FH, '<', 'x');\nprint \"hi\";\n";
        let suggestions = suggest_improvements(content, ScriptType::Perl);
        assert_eq!(suggestions.len(), 3 + GENERAL_SUGGESTIONS.len());
        assert!(suggestions.iter().any(|s| s.contains("click")));
    }

    #[test]
    fn test_plain_script_gets_only_general_suggestions() {
        let suggestions = suggest_improvements("make all\n", ScriptType::Shell);
        assert_eq!(suggestions, GENERAL_SUGGESTIONS);
    }
}
