use serde::{Deserialize, Serialize};

use super::defaults;

/// Disambiguation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisambiguationConfig {
    /// Inputs with at most this many whitespace tokens take the short-input branch.
    pub short_input_max_tokens: usize,
    /// Question used when a trigger matches but has no templates.
    pub fallback_question: String,
}

impl Default for DisambiguationConfig {
    fn default() -> Self {
        Self {
            short_input_max_tokens: defaults::DEFAULT_SHORT_INPUT_MAX_TOKENS,
            fallback_question: defaults::DEFAULT_FALLBACK_QUESTION.to_string(),
        }
    }
}
