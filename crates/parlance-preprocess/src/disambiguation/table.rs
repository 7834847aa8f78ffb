use parlance_core::config::ClarificationConfig;
use parlance_core::errors::ParlanceResult;
use xxhash_rust::xxh3::xxh3_64;

use crate::pattern::require_non_empty;

const TABLE: &str = "clarifications";

/// A trigger keyword and its candidate questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClarificationEntry {
    pub trigger: String,
    /// Empty for untemplated triggers.
    pub questions: Vec<String>,
}

impl ClarificationEntry {
    pub fn new(trigger: &str, questions: &[impl AsRef<str>]) -> ParlanceResult<Self> {
        let trigger = require_non_empty(TABLE, "trigger", trigger)?;
        let questions = questions
            .iter()
            .map(|q| require_non_empty(TABLE, "question", q.as_ref()).map(str::to_string))
            .collect::<ParlanceResult<Vec<_>>>()?;
        Ok(Self {
            trigger: trigger.trim().to_lowercase(),
            questions,
        })
    }

    /// Deterministic pick among the templates, keyed on the text.
    pub fn question_for(&self, text: &str) -> Option<&str> {
        if self.questions.is_empty() {
            return None;
        }
        let index = (xxh3_64(text.as_bytes()) % self.questions.len() as u64) as usize;
        Some(self.questions[index].as_str())
    }
}

/// Triggers in fixed priority order.
#[derive(Debug, Clone, Default)]
pub struct ClarificationTable {
    entries: Vec<ClarificationEntry>,
}

impl ClarificationTable {
    /// A repeated trigger replaces the earlier entry's questions in place.
    pub fn new(entries: Vec<ClarificationEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            match table.entries.iter_mut().find(|e| e.trigger == entry.trigger) {
                Some(existing) => existing.questions = entry.questions,
                None => table.entries.push(entry),
            }
        }
        table
    }

    pub fn builtin(extra: &[ClarificationConfig]) -> ParlanceResult<Self> {
        let mut entries = super::templates::CLARIFICATIONS
            .iter()
            .map(|(trigger, questions)| ClarificationEntry::new(trigger, *questions))
            .collect::<ParlanceResult<Vec<_>>>()?;
        for c in extra {
            entries.push(ClarificationEntry::new(&c.trigger, c.questions.as_slice())?);
        }
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, trigger: &str) -> Option<&ClarificationEntry> {
        self.entries.iter().find(|e| e.trigger == trigger)
    }

    /// First trigger, in priority order, that occurs as a substring of `text`.
    pub fn first_trigger(&self, text: &str) -> Option<&ClarificationEntry> {
        self.entries.iter().find(|e| text.contains(e.trigger.as_str()))
    }
}
