//! Non-literal signals surfaced from phrasing.
//!
//! Rules are evaluated strictly in declaration order; the first rule whose
//! pattern matches anywhere in the text supplies the meaning. Rules are not
//! ranked by specificity.

pub mod rules;

use parlance_core::config::ImplicitRuleConfig;
use parlance_core::errors::ParlanceResult;
use regex::Regex;

use crate::pattern::{compile, require_non_empty};

const TABLE: &str = "implicit_rules";

#[derive(Debug, Clone)]
pub struct ImplicitRule {
    pub regex: Regex,
    pub meaning: String,
    pub undertone: String,
}

impl ImplicitRule {
    pub fn new(pattern: &str, meaning: &str, undertone: &str) -> ParlanceResult<Self> {
        Ok(Self {
            regex: compile(TABLE, pattern)?,
            meaning: require_non_empty(TABLE, "meaning", meaning)?.to_string(),
            undertone: require_non_empty(TABLE, "undertone", undertone)?.to_string(),
        })
    }
}

/// Meaning and undertone of the winning rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplicitMeaning<'a> {
    pub meaning: &'a str,
    pub undertone: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct ImplicitMeaningExtractor {
    rules: Vec<ImplicitRule>,
}

impl ImplicitMeaningExtractor {
    pub fn new(rules: Vec<ImplicitRule>) -> Self {
        Self { rules }
    }

    /// Built-in rules, then configured rules at lower priority.
    pub fn builtin(extra: &[ImplicitRuleConfig]) -> ParlanceResult<Self> {
        let mut compiled = rules::IMPLICIT_RULES
            .iter()
            .map(|(pattern, meaning, undertone)| ImplicitRule::new(pattern, meaning, undertone))
            .collect::<ParlanceResult<Vec<_>>>()?;
        for r in extra {
            compiled.push(ImplicitRule::new(&r.pattern, &r.meaning, &r.undertone)?);
        }
        Ok(Self::new(compiled))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn extract(&self, text: &str) -> Option<ImplicitMeaning<'_>> {
        self.rules
            .iter()
            .find(|rule| rule.regex.is_match(text))
            .map(|rule| ImplicitMeaning {
                meaning: &rule.meaning,
                undertone: &rule.undertone,
            })
    }
}
