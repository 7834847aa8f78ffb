/// Parlance version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Context label used when no context rule matches.
pub const GENERAL_CONTEXT: &str = "general";

/// Confidence reported alongside the "general" context.
pub const GENERAL_CONTEXT_CONFIDENCE: f64 = 0.0;

// --- Classification confidences ---
//
// Fixed heuristic constants, not calibrated probabilities. Downstream
// response selection compares them, so the values must stay stable.

/// Literal/figurative axis: no figurative cue matched.
pub const LITERAL_CONFIDENCE: f64 = 0.8;
/// Literal/figurative axis: a figurative cue matched.
pub const FIGURATIVE_CONFIDENCE: f64 = 0.7;

/// Serious/playful axis: no playful cue matched.
pub const SERIOUS_CONFIDENCE: f64 = 0.7;
/// Serious/playful axis: a playful cue matched.
pub const PLAYFUL_CONFIDENCE: f64 = 0.75;

/// Direct/indirect axis: no cue matched.
pub const DIRECT_DEFAULT_CONFIDENCE: f64 = 0.7;
/// Direct/indirect axis: a hedging phrase matched.
pub const INDIRECT_CUE_CONFIDENCE: f64 = 0.75;
/// Direct/indirect axis: an explicit request phrase matched.
pub const DIRECT_CUE_CONFIDENCE: f64 = 0.8;

/// Number of classification axes. Every result carries exactly this many.
pub const AXIS_COUNT: usize = 3;
