//! Abbreviation and idiom lookup.
//!
//! Single tokens are checked first, in text order. Only when no token
//! matches is the text scanned for multi-word terms, in table order.
//! One meaning at most is returned per call.

pub mod tables;

use std::collections::HashMap;

use parlance_core::config::SlangEntryConfig;
use parlance_core::errors::ParlanceResult;
use parlance_core::models::SlangCategory;

use crate::pattern::require_non_empty;

const TABLE: &str = "slang";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlangEntry {
    pub term: String,
    pub meaning: String,
    pub category: SlangCategory,
}

impl SlangEntry {
    pub fn new(term: &str, meaning: &str, category: SlangCategory) -> ParlanceResult<Self> {
        let term = require_non_empty(TABLE, "term", term)?;
        let meaning = require_non_empty(TABLE, "meaning", meaning)?;
        Ok(Self {
            term: term.trim().to_lowercase(),
            meaning: meaning.to_string(),
            category,
        })
    }

    pub fn is_multi_word(&self) -> bool {
        self.term.contains(char::is_whitespace)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlangResolver {
    entries: Vec<SlangEntry>,
    single: HashMap<String, usize>,
    multi_word: Vec<usize>,
}

impl SlangResolver {
    /// A repeated term replaces the earlier entry in place.
    pub fn new(entries: Vec<SlangEntry>) -> Self {
        let mut resolver = Self::default();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for entry in entries {
            if let Some(&i) = positions.get(&entry.term) {
                resolver.entries[i] = entry;
                continue;
            }
            let i = resolver.entries.len();
            positions.insert(entry.term.clone(), i);
            if entry.is_multi_word() {
                resolver.multi_word.push(i);
            } else {
                resolver.single.insert(entry.term.clone(), i);
            }
            resolver.entries.push(entry);
        }

        resolver
    }

    /// Built-in table followed by configured extras.
    pub fn builtin(extra: &[SlangEntryConfig]) -> ParlanceResult<Self> {
        let mut entries = tables::SLANG
            .iter()
            .map(|(term, meaning, category)| SlangEntry::new(term, meaning, *category))
            .collect::<ParlanceResult<Vec<_>>>()?;
        for e in extra {
            entries.push(SlangEntry::new(&e.term, &e.meaning, e.category)?);
        }
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Single-word terms, for exempting them from fuzzy typo correction.
    pub fn single_word_terms(&self) -> impl Iterator<Item = &str> {
        self.single.keys().map(String::as_str)
    }

    /// First matching entry for `text`.
    pub fn resolve(&self, text: &str) -> Option<&SlangEntry> {
        for token in text.split_whitespace() {
            let clean: String = token
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();
            if let Some(&i) = self.single.get(&clean) {
                return Some(&self.entries[i]);
            }
        }

        let lower = text.to_lowercase();
        self.multi_word
            .iter()
            .map(|&i| &self.entries[i])
            .find(|entry| lower.contains(&entry.term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> SlangResolver {
        SlangResolver::builtin(&[]).unwrap()
    }

    #[test]
    fn single_token_match() {
        let r = resolver();
        assert_eq!(r.resolve("idk what to do").unwrap().meaning, "I don't know");
    }

    #[test]
    fn punctuation_stripped_from_tokens() {
        let r = resolver();
        assert_eq!(r.resolve("ok, tbh.").unwrap().term, "tbh");
    }

    #[test]
    fn first_token_wins() {
        let r = resolver();
        assert_eq!(r.resolve("btw idk").unwrap().term, "btw");
    }

    #[test]
    fn single_token_beats_multi_word() {
        let r = resolver();
        assert_eq!(r.resolve("no cap lol").unwrap().term, "lol");
    }

    #[test]
    fn multi_word_containment() {
        let r = resolver();
        let entry = r.resolve("honestly it is what it is").unwrap();
        assert_eq!(entry.category, SlangCategory::Expression);
    }

    #[test]
    fn no_match() {
        assert!(resolver().resolve("hello there").is_none());
    }

    #[test]
    fn blank_term_rejected() {
        assert!(SlangEntry::new("  ", "nothing", SlangCategory::Informal).is_err());
    }

    #[test]
    fn extra_entry_overrides_builtin() {
        let extra = SlangEntryConfig {
            term: "idk".into(),
            meaning: "i do not know".into(),
            category: SlangCategory::Abbreviation,
        };
        let r = SlangResolver::builtin(&[extra]).unwrap();
        assert_eq!(r.resolve("idk").unwrap().meaning, "i do not know");
    }
}
