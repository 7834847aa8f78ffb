//! Built-in cue patterns per axis.

use parlance_core::constants::{
    DIRECT_CUE_CONFIDENCE, FIGURATIVE_CONFIDENCE, INDIRECT_CUE_CONFIDENCE, PLAYFUL_CONFIDENCE,
};
use parlance_core::models::Label;

/// Any match means figurative.
pub const FIGURATIVE_CUES: &[(&str, Label, f64)] = &[
    (r"\b(like a|as if|as though)\b", Label::Figurative, FIGURATIVE_CONFIDENCE),
    (r"\bas \w+ as\b", Label::Figurative, FIGURATIVE_CONFIDENCE),
    (
        r"\b(dying|killing me|dead inside|drowning|sinking|on fire|falling apart)\b",
        Label::Figurative,
        FIGURATIVE_CONFIDENCE,
    ),
    (
        r"\b(million|billion|thousand) (times|things|years)\b",
        Label::Figurative,
        FIGURATIVE_CONFIDENCE,
    ),
    (
        r"\b(heart (is|was) (broken|heavy)|weight of the world|end of the world)\b",
        Label::Figurative,
        FIGURATIVE_CONFIDENCE,
    ),
];

/// Any match means playful.
pub const PLAYFUL_CUES: &[(&str, Label, f64)] = &[
    (r"\b(lol|lmao|rofl|haha+|hehe+|jk)\b", Label::Playful, PLAYFUL_CONFIDENCE),
    (r"(:\)|:d\b|;\)|:p\b|\bxd\b)", Label::Playful, PLAYFUL_CONFIDENCE),
    (r"\b(just kidding|joking|for fun)\b", Label::Playful, PLAYFUL_CONFIDENCE),
];

/// Iteration order decides: hedging is checked before explicit requests.
pub const DIRECTNESS_CUES: &[(&str, Label, f64)] = &[
    (
        r"\b(maybe|perhaps|i was wondering|do you think)\b",
        Label::Indirect,
        INDIRECT_CUE_CONFIDENCE,
    ),
    (
        r"\b(please|can you|could you|tell me)\b",
        Label::Direct,
        DIRECT_CUE_CONFIDENCE,
    ),
];
