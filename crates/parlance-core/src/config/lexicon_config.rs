use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::SlangCategory;

/// Additive overrides layered on top of the built-in tables.
///
/// An entry whose key matches a built-in one (misspelling, slang term, or
/// clarification trigger) takes over that entry in place; everything else
/// is appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Extra misspelling → canonical word mappings.
    pub corrections: BTreeMap<String, String>,
    /// Extra words for the fuzzy-match fallback pool.
    pub common_words: Vec<String>,
    pub slang: Vec<SlangEntryConfig>,
    pub context_rules: Vec<ContextRuleConfig>,
    /// Appended after the built-in rules, so they have the lowest priority.
    pub implicit_rules: Vec<ImplicitRuleConfig>,
    /// Appended after the built-in triggers in priority order.
    pub clarifications: Vec<ClarificationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlangEntryConfig {
    pub term: String,
    pub meaning: String,
    #[serde(default)]
    pub category: SlangCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextRuleConfig {
    pub pattern: String,
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplicitRuleConfig {
    pub pattern: String,
    pub meaning: String,
    pub undertone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarificationConfig {
    pub trigger: String,
    /// Empty means the trigger uses the fallback question.
    #[serde(default)]
    pub questions: Vec<String>,
}
