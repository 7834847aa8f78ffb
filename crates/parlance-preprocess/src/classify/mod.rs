//! Three independent axes evaluated against the same text:
//! literal/figurative, serious/playful, direct/indirect.
//! Each yields exactly one label with a fixed heuristic confidence.

pub mod axis;
pub mod cues;

use parlance_core::constants::{
    AXIS_COUNT, DIRECT_DEFAULT_CONFIDENCE, LITERAL_CONFIDENCE, SERIOUS_CONFIDENCE,
};
use parlance_core::errors::ParlanceResult;
use parlance_core::models::{Axis, Classification, Label};

pub use self::axis::{AxisTable, CueRule};

#[derive(Debug, Clone)]
pub struct InputClassifier {
    literality: AxisTable,
    tone: AxisTable,
    directness: AxisTable,
}

impl InputClassifier {
    /// Callers pass one table per axis; mismatched axes are a programming error
    /// caught by `AxisTable::new`'s label checks.
    pub fn new(literality: AxisTable, tone: AxisTable, directness: AxisTable) -> Self {
        debug_assert_eq!(literality.axis(), Axis::Literality);
        debug_assert_eq!(tone.axis(), Axis::Tone);
        debug_assert_eq!(directness.axis(), Axis::Directness);
        Self {
            literality,
            tone,
            directness,
        }
    }

    pub fn builtin() -> ParlanceResult<Self> {
        Ok(Self::new(
            AxisTable::new(
                Axis::Literality,
                cues::FIGURATIVE_CUES,
                Label::Literal,
                LITERAL_CONFIDENCE,
            )?,
            AxisTable::new(Axis::Tone, cues::PLAYFUL_CUES, Label::Serious, SERIOUS_CONFIDENCE)?,
            AxisTable::new(
                Axis::Directness,
                cues::DIRECTNESS_CUES,
                Label::Direct,
                DIRECT_DEFAULT_CONFIDENCE,
            )?,
        ))
    }

    pub fn classify(&self, text: &str) -> [Classification; AXIS_COUNT] {
        [
            self.literality.classify(text),
            self.tone.classify(text),
            self.directness.classify(text),
        ]
    }
}
