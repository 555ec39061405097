// ============================================================
// Layer 4 — Pattern Rules
// ============================================================
// Reformulation turns a question into an ordered list of
// case-insensitive regular expressions. Each question type owns
// a table of RuleTemplates; a template is instantiated once per
// relaxation step with the question tokens bound at that step.
//
// Placeholders a template may use:
//
//   {suffix}  tokens[i..]          "The Liberty Bell"
//   {head}    tokens[i..len-1]     "Bill Clinton"   (suffix minus last)
//   {last}    tokens[len-1]        "born"
//   {aux}     tokens[1]            "invented"
//
// Every bound value is regex-escaped; only the template's own
// text is pattern syntax.
//
// Reference: regex crate documentation (RegexBuilder, escape)

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::domain::question::Question;

/// A compiled, case-insensitive pattern plus the text it came from.
#[derive(Debug, Clone)]
pub struct PatternRule {
    source: String,
    regex:  Regex,
}

impl PatternRule {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let source = pattern.into();
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid pattern rule '{source}'"))?;
        Ok(Self { source, regex })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The leftmost matching span, if any.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|m| m.as_str())
    }
}

/// One row of a declarative rule table.
#[derive(Debug, Clone, Copy)]
pub struct RuleTemplate {
    /// What a match means, for the trace log and tests
    pub intent:  &'static str,
    pub pattern: &'static str,
}

impl RuleTemplate {
    pub const fn new(intent: &'static str, pattern: &'static str) -> Self {
        Self { intent, pattern }
    }

    pub fn instantiate(&self, bindings: &Bindings) -> Result<PatternRule> {
        let pattern = self
            .pattern
            .replace("{suffix}", &bindings.suffix)
            .replace("{head}", &bindings.head)
            .replace("{last}", &bindings.last)
            .replace("{aux}", &bindings.aux);
        PatternRule::new(pattern).with_context(|| format!("Cannot build '{}' rule", self.intent))
    }
}

/// Escaped token values for one relaxation step.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    pub suffix: String,
    pub head:   String,
    pub last:   String,
    pub aux:    String,
}

impl Bindings {
    /// Bind the question's tokens starting at position `from`.
    pub fn at(question: &Question, from: usize) -> Self {
        Self {
            suffix: regex::escape(&question.suffix(from)),
            head:   regex::escape(&question.suffix_without_last(from)),
            last:   regex::escape(question.last().unwrap_or_default()),
            aux:    regex::escape(question.tokens.get(1).map(String::as_str).unwrap_or_default()),
        }
    }
}
