use serde::{Deserialize, Serialize};

use super::defaults;

/// Typo correction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypoConfig {
    /// Largest edit distance accepted for a fuzzy replacement.
    pub max_distance: usize,
    /// Words with fewer letters than this skip fuzzy matching and only
    /// consult the direct correction table.
    pub min_fuzzy_len: usize,
}

impl Default for TypoConfig {
    fn default() -> Self {
        Self {
            max_distance: defaults::DEFAULT_MAX_TYPO_DISTANCE,
            min_fuzzy_len: defaults::DEFAULT_MIN_FUZZY_LEN,
        }
    }
}
