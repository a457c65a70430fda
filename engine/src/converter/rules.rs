//! Named regex rewrite rules.
//!
//! A conversion is an ordered list of [`RewriteRule`]s applied one after the
//! other over the whole text. Each rule is tagged with the source
//! [`Construct`] it targets, so rules can be listed, tested and reported on
//! individually.

use std::borrow::Cow;
use std::fmt;

use regex::{Captures, Regex};
use serde::Serialize;

/// Source-language construct a rule rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Construct {
    Shebang,
    Variable,
    CommandSubstitution,
    Conditional,
    Loop,
    Function,
    Module,
    Command,
    FileOperation,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Shebang => "shebang",
            Self::Variable => "variable",
            Self::CommandSubstitution => "command_substitution",
            Self::Conditional => "conditional",
            Self::Loop => "loop",
            Self::Function => "function",
            Self::Module => "module",
            Self::Command => "command",
            Self::FileOperation => "file_operation",
        };
        f.write_str(label)
    }
}

enum Replacement {
    /// `regex` replacement template (`${1}` refers to capture group 1).
    Template(&'static str),
    /// Computes the replacement from the captures.
    Rewrite(fn(&Captures<'_>) -> String),
}

/// One named, regex-driven text rewrite.
pub struct RewriteRule {
    name: &'static str,
    construct: Construct,
    pattern: Regex,
    replacement: Replacement,
}

impl RewriteRule {
    /// Builds a rule that substitutes a fixed template.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex. Rule tables are static, so
    /// this only fires on a programming error.
    pub(crate) fn template(
        name: &'static str,
        construct: Construct,
        pattern: &str,
        template: &'static str,
    ) -> Self {
        Self {
            name,
            construct,
            pattern: Regex::new(pattern).expect("static regex must compile"),
            replacement: Replacement::Template(template),
        }
    }

    /// Builds a rule whose replacement is computed from the captures.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex.
    pub(crate) fn rewrite(
        name: &'static str,
        construct: Construct,
        pattern: &str,
        rewrite: fn(&Captures<'_>) -> String,
    ) -> Self {
        Self {
            name,
            construct,
            pattern: Regex::new(pattern).expect("static regex must compile"),
            replacement: Replacement::Rewrite(rewrite),
        }
    }

    /// Dotted rule name, e.g. `shell.command_substitution`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn construct(&self) -> Construct {
        self.construct
    }

    /// Returns `true` if the rule would change `input`.
    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }

    /// Rewrites every non-overlapping match in `input`.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match &self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(input, *template),
            Replacement::Rewrite(rewrite) => self
                .pattern
                .replace_all(input, |caps: &Captures<'_>| rewrite(caps)),
        }
    }
}

impl fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewriteRule")
            .field("name", &self.name)
            .field("construct", &self.construct)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Applies `rules` in order, feeding each rule the previous rule's output.
pub fn apply_rules(rules: &[RewriteRule], input: &str) -> String {
    let mut text = input.to_string();
    for rule in rules {
        if let Cow::Owned(rewritten) = rule.apply(&text) {
            text = rewritten;
        }
    }
    text
}
