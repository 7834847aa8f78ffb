//! # parlance-preprocess
//!
//! Normalizes a raw utterance before intent/emotion interpretation:
//! typo correction (table + edit-distance fallback), slang expansion,
//! implicit-meaning extraction, context inference, three-axis tone
//! classification, and clarification-question synthesis.
//!
//! Build a [`PreprocessEngine`] once and share it; every table is
//! immutable after construction, so calls from many threads need no locking.

pub mod classify;
pub mod context;
pub mod disambiguation;
pub mod distance;
pub mod engine;
pub mod implicit;
pub mod lexicon;
pub mod pattern;
pub mod slang;
pub mod typo;

pub use classify::InputClassifier;
pub use context::{ContextInferrer, ContextRule};
pub use disambiguation::{Clarification, DisambiguationEngine};
pub use distance::levenshtein;
pub use engine::PreprocessEngine;
pub use implicit::{ImplicitMeaning, ImplicitMeaningExtractor, ImplicitRule};
pub use lexicon::Lexicon;
pub use slang::{SlangEntry, SlangResolver};
pub use typo::{TypoCorrection, TypoCorrector};
