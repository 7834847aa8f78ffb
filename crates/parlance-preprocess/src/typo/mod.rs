//! Per-token typo correction.
//!
//! Each whitespace token is split into punctuation and a word core. The
//! lowercased letters of the core are looked up in the correction table;
//! failing that, plain words of at least two letters are compared against the
//! merged candidate pool and replaced when the closest candidate is within the
//! configured edit distance.
//! Punctuation is reattached and the tokens are rejoined with single spaces.

pub mod candidates;
pub mod tables;
mod token;

use std::collections::{HashMap, HashSet};

use parlance_core::config::TypoConfig;

use self::candidates::CandidateSet;
use self::token::TokenParts;

/// Output of a correction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypoCorrection {
    pub text: String,
    /// True when at least one token was replaced.
    pub changed: bool,
}

/// Typo corrector over an immutable correction table and word pool.
#[derive(Debug, Clone)]
pub struct TypoCorrector {
    corrections: HashMap<String, String>,
    candidates: CandidateSet,
    /// Never fuzzy-corrected (direct table lookups still apply). Seeded with
    /// every canonical word so a second pass leaves corrected text alone.
    protected: HashSet<String>,
    config: TypoConfig,
}

impl TypoCorrector {
    /// Build from explicit tables. Later duplicates of a misspelling override
    /// the mapping but keep the first declaration's tie-break position.
    pub fn new(
        corrections: Vec<(String, String)>,
        common_words: Vec<String>,
        config: &TypoConfig,
    ) -> Self {
        let mut ordered: Vec<(String, String)> = Vec::with_capacity(corrections.len());
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (misspelling, canonical) in corrections {
            let misspelling = misspelling.to_lowercase();
            let canonical = canonical.to_lowercase();
            match positions.get(&misspelling) {
                Some(&i) => ordered[i].1 = canonical,
                None => {
                    positions.insert(misspelling.clone(), ordered.len());
                    ordered.push((misspelling, canonical));
                }
            }
        }

        let common_words: Vec<String> =
            common_words.into_iter().map(|w| w.to_lowercase()).collect();
        let candidates = CandidateSet::new(&ordered, &common_words);

        let protected = ordered
            .iter()
            .flat_map(|(_, canonical)| canonical.split_whitespace())
            .map(|token| TokenParts::split(token).clean())
            .filter(|clean| !clean.is_empty())
            .collect();

        Self {
            corrections: ordered.into_iter().collect(),
            candidates,
            protected,
            config: config.clone(),
        }
    }

    /// Built-in tables plus any extra entries.
    pub fn builtin(
        extra_corrections: impl IntoIterator<Item = (String, String)>,
        extra_common_words: impl IntoIterator<Item = String>,
        config: &TypoConfig,
    ) -> Self {
        let corrections = tables::CORRECTIONS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .chain(extra_corrections)
            .collect();
        let common_words = tables::COMMON_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_common_words)
            .collect();
        Self::new(corrections, common_words, config)
    }

    /// Exempt words from fuzzy matching.
    pub fn with_protected(mut self, words: impl IntoIterator<Item = String>) -> Self {
        self.protected.extend(words.into_iter().map(|w| w.to_lowercase()));
        self
    }

    pub fn correction_count(&self) -> usize {
        self.corrections.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Correct every token of `text`.
    pub fn correct(&self, text: &str) -> TypoCorrection {
        let mut changed = false;
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| match self.correct_token(token) {
                Some(replaced) => {
                    changed = true;
                    replaced
                }
                None => token.to_string(),
            })
            .collect();

        TypoCorrection {
            text: tokens.join(" "),
            changed,
        }
    }

    /// Replacement for one token, or `None` when it stays as is.
    fn correct_token(&self, token: &str) -> Option<String> {
        let parts = TokenParts::split(token);
        let clean = parts.clean();
        if clean.is_empty() {
            return None;
        }

        let replacement = self.lookup(&clean, parts.is_plain())?;
        if replacement == parts.core.to_lowercase() {
            return None;
        }

        Some(format!("{}{}{}", parts.prefix, replacement, parts.suffix))
    }

    /// Canonical form for a cleaned word: direct table first, then fuzzy.
    pub fn lookup(&self, clean: &str, plain: bool) -> Option<&str> {
        if let Some(canonical) = self.corrections.get(clean) {
            return Some(canonical.as_str());
        }

        // Inner marks ("everyone's") would be lost by a fuzzy replacement.
        if !plain
            || self.protected.contains(clean)
            || clean.chars().count() < self.config.min_fuzzy_len
        {
            return None;
        }

        self.candidates
            .best_match(clean, self.config.max_distance)
            .map(|(candidate, _)| candidate.replacement.as_str())
    }
}
