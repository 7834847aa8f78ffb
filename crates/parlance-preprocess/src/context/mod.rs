//! Topic/situation inference.
//!
//! Every rule is evaluated. Among the rules that match, the one with the
//! strictly highest confidence weight supplies the label; on equal weight the
//! earlier rule in table order keeps its place. No match yields "general"
//! with confidence 0.

pub mod rules;

use parlance_core::config::ContextRuleConfig;
use parlance_core::errors::ParlanceResult;
use parlance_core::models::InferredContext;
use regex::Regex;

use crate::pattern::{check_confidence, compile, require_non_empty};

const TABLE: &str = "context_rules";

#[derive(Debug, Clone)]
pub struct ContextRule {
    pub regex: Regex,
    pub label: String,
    pub confidence: f64,
}

impl ContextRule {
    pub fn new(pattern: &str, label: &str, confidence: f64) -> ParlanceResult<Self> {
        let label = require_non_empty(TABLE, "label", label)?;
        Ok(Self {
            regex: compile(TABLE, pattern)?,
            label: label.to_string(),
            confidence: check_confidence(TABLE, label, confidence)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContextInferrer {
    rules: Vec<ContextRule>,
}

impl ContextInferrer {
    pub fn new(rules: Vec<ContextRule>) -> Self {
        Self { rules }
    }

    pub fn builtin(extra: &[ContextRuleConfig]) -> ParlanceResult<Self> {
        let mut compiled = rules::CONTEXT_RULES
            .iter()
            .map(|(pattern, label, confidence)| ContextRule::new(pattern, label, *confidence))
            .collect::<ParlanceResult<Vec<_>>>()?;
        for r in extra {
            compiled.push(ContextRule::new(&r.pattern, &r.label, r.confidence)?);
        }
        Ok(Self::new(compiled))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn infer(&self, text: &str) -> InferredContext {
        let mut best: Option<&ContextRule> = None;
        for rule in &self.rules {
            if !rule.regex.is_match(text) {
                continue;
            }
            if best.map_or(true, |b| rule.confidence > b.confidence) {
                best = Some(rule);
            }
        }

        match best {
            Some(rule) => InferredContext {
                label: rule.label.clone(),
                confidence: rule.confidence,
            },
            None => InferredContext::general(),
        }
    }
}
