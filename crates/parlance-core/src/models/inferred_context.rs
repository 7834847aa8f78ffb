use serde::{Deserialize, Serialize};

use crate::constants::{GENERAL_CONTEXT, GENERAL_CONTEXT_CONFIDENCE};

/// Best-guess conversational situation and the weight of the rule that chose it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferredContext {
    pub label: String,
    pub confidence: f64,
}

impl InferredContext {
    pub fn general() -> Self {
        Self {
            label: GENERAL_CONTEXT.to_string(),
            confidence: GENERAL_CONTEXT_CONFIDENCE,
        }
    }

    pub fn is_general(&self) -> bool {
        self.label == GENERAL_CONTEXT
    }
}

impl Default for InferredContext {
    fn default() -> Self {
        Self::general()
    }
}
