use serde::{Deserialize, Serialize};

use crate::constants::{
    AXIS_COUNT, DIRECT_DEFAULT_CONFIDENCE, LITERAL_CONFIDENCE, SERIOUS_CONFIDENCE,
};

/// The three independent classification axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Literal vs. figurative.
    Literality,
    /// Serious vs. playful.
    Tone,
    /// Direct vs. indirect.
    Directness,
}

impl Axis {
    /// All axes in result order.
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::Literality, Axis::Tone, Axis::Directness];

    /// Position of this axis in `ProcessingResult::classifications`.
    pub fn index(self) -> usize {
        match self {
            Axis::Literality => 0,
            Axis::Tone => 1,
            Axis::Directness => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Literality => "literality",
            Axis::Tone => "tone",
            Axis::Directness => "directness",
        }
    }
}

/// A label on one of the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Literal,
    Figurative,
    Serious,
    Playful,
    Direct,
    Indirect,
}

impl Label {
    /// The axis this label belongs to.
    pub fn axis(self) -> Axis {
        match self {
            Label::Literal | Label::Figurative => Axis::Literality,
            Label::Serious | Label::Playful => Axis::Tone,
            Label::Direct | Label::Indirect => Axis::Directness,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Literal => "literal",
            Label::Figurative => "figurative",
            Label::Serious => "serious",
            Label::Playful => "playful",
            Label::Direct => "direct",
            Label::Indirect => "indirect",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One axis verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub axis: Axis,
    pub label: Label,
    pub confidence: f64,
}

impl Classification {
    pub fn new(label: Label, confidence: f64) -> Self {
        Self {
            axis: label.axis(),
            label,
            confidence,
        }
    }

    /// The verdicts reported when no cue has been evaluated:
    /// literal 0.8, serious 0.7, direct 0.7.
    pub fn defaults() -> [Classification; AXIS_COUNT] {
        [
            Classification::new(Label::Literal, LITERAL_CONFIDENCE),
            Classification::new(Label::Serious, SERIOUS_CONFIDENCE),
            Classification::new(Label::Direct, DIRECT_DEFAULT_CONFIDENCE),
        ]
    }
}
