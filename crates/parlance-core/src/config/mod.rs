//! Configuration, loaded from TOML. Every section falls back to its defaults.

pub mod defaults;
mod disambiguation_config;
mod lexicon_config;
mod observability_config;
mod typo_config;

pub use disambiguation_config::DisambiguationConfig;
pub use lexicon_config::{
    ClarificationConfig, ContextRuleConfig, ImplicitRuleConfig, LexiconConfig, SlangEntryConfig,
};
pub use observability_config::ObservabilityConfig;
pub use typo_config::TypoConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ParlanceResult};

/// Top-level configuration for the preprocessor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParlanceConfig {
    pub typo: TypoConfig,
    pub disambiguation: DisambiguationConfig,
    pub lexicon: LexiconConfig,
    pub observability: ObservabilityConfig,
}

impl ParlanceConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(input: &str) -> ParlanceResult<Self> {
        toml::from_str(input).map_err(|e| {
            ConfigError::TomlParse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ParlanceResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }
}
