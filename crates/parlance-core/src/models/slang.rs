use serde::{Deserialize, Serialize};

/// Coarse grouping for slang entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlangCategory {
    /// Letter abbreviations ("idk", "tbh").
    #[default]
    Abbreviation,
    /// Multi-word idioms ("no cap").
    Expression,
    /// Single-word informal terms ("lowkey").
    Informal,
}
