//! PreprocessEngine: implements IPreprocessor, sequences every stage.
//!
//! normalize (trim, lowercase) → typo-correct → slang, implicit meaning,
//! context, classification, disambiguation. The last five all read the
//! corrected text. Blank input stops right after normalization.

use parlance_core::config::ParlanceConfig;
use parlance_core::errors::ParlanceResult;
use parlance_core::models::ProcessingResult;
use parlance_core::traits::IPreprocessor;
use parlance_observability::tracing_setup::events;
use parlance_observability::{batch_span, preprocess_span};
use rayon::prelude::*;
use tracing::debug;

use crate::lexicon::Lexicon;

/// The preprocessing pipeline over an immutable lexicon.
#[derive(Debug, Clone)]
pub struct PreprocessEngine {
    lexicon: Lexicon,
}

impl PreprocessEngine {
    pub fn new(config: &ParlanceConfig) -> ParlanceResult<Self> {
        Ok(Self::from_lexicon(Lexicon::from_config(config)?))
    }

    pub fn builtin() -> ParlanceResult<Self> {
        Self::new(&ParlanceConfig::default())
    }

    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Run the full pipeline on one utterance.
    pub fn process(&self, input: &str) -> ProcessingResult {
        let _span = preprocess_span!(input.len()).entered();

        let normalized = normalize(input);
        if normalized.is_empty() {
            debug!("blank input, skipping pipeline");
            return ProcessingResult::empty();
        }

        let lex = &self.lexicon;

        let correction = lex.typo.correct(&normalized);
        // Whitespace collapse alone also counts as a correction.
        let corrected = correction.text != normalized;
        if corrected {
            events::typo_corrected(&normalized, &correction.text);
        }
        let text = correction.text.as_str();

        let slang = lex.slang.resolve(text);
        let implicit = lex.implicit.extract(text);
        let context = lex.context.infer(text);
        let classifications = lex.classifier.classify(text);
        let clarification = lex.disambiguation.evaluate(text);

        debug!(
            slang = ?slang.map(|s| s.term.as_str()),
            implicit = ?implicit.map(|m| m.meaning),
            context = %context.label,
            context_confidence = context.confidence,
            "stages complete"
        );
        if let Some(trigger) = clarification.trigger.as_deref() {
            if clarification.needed {
                events::clarification_requested(trigger);
            } else {
                events::clarification_cleared(trigger);
            }
        }

        ProcessingResult {
            processed_input: correction.text.clone(),
            corrected_typo: corrected.then(|| correction.text.clone()),
            slang_meaning: slang.map(|s| s.meaning.clone()),
            implicit_meaning: implicit.map(|m| m.meaning.to_string()),
            implicit_undertone: implicit.map(|m| m.undertone.to_string()),
            inferred_context: context.label,
            context_confidence: context.confidence,
            classifications,
            needs_clarification: clarification.needed,
            clarification_question: clarification.question,
        }
    }

    /// Process many utterances in parallel. Output order matches input order.
    pub fn process_batch<S>(&self, inputs: &[S]) -> Vec<ProcessingResult>
    where
        S: AsRef<str> + Sync,
    {
        let _span = batch_span!(inputs.len()).entered();
        inputs
            .par_iter()
            .map(|input| self.process(input.as_ref()))
            .collect()
    }
}

impl IPreprocessor for PreprocessEngine {
    fn process(&self, input: &str) -> ProcessingResult {
        PreprocessEngine::process(self, input)
    }
}

/// Trim and lowercase.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
