use serde::{Deserialize, Serialize};

use super::classification::{Axis, Classification};
use crate::constants::{AXIS_COUNT, GENERAL_CONTEXT, GENERAL_CONTEXT_CONFIDENCE};

/// Everything the preprocessor learned about one utterance.
///
/// Built fresh per call. JSON field names are camelCase for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    /// Normalized, typo-corrected text.
    pub processed_input: String,
    /// Set only when typo correction changed the normalized text.
    pub corrected_typo: Option<String>,
    pub slang_meaning: Option<String>,
    pub implicit_meaning: Option<String>,
    pub implicit_undertone: Option<String>,
    pub inferred_context: String,
    pub context_confidence: f64,
    /// Exactly one verdict per axis, ordered as `Axis::ALL`.
    pub classifications: [Classification; AXIS_COUNT],
    pub needs_clarification: bool,
    pub clarification_question: Option<String>,
}

impl ProcessingResult {
    /// Result for blank input: nothing but an empty `processed_input`.
    pub fn empty() -> Self {
        Self {
            processed_input: String::new(),
            corrected_typo: None,
            slang_meaning: None,
            implicit_meaning: None,
            implicit_undertone: None,
            inferred_context: GENERAL_CONTEXT.to_string(),
            context_confidence: GENERAL_CONTEXT_CONFIDENCE,
            classifications: Classification::defaults(),
            needs_clarification: false,
            clarification_question: None,
        }
    }

    /// The verdict for one axis.
    pub fn classification(&self, axis: Axis) -> &Classification {
        &self.classifications[axis.index()]
    }
}

impl Default for ProcessingResult {
    fn default() -> Self {
        Self::empty()
    }
}
