//! All compiled tables, built once and read-only afterwards.

use parlance_core::config::ParlanceConfig;
use parlance_core::errors::ParlanceResult;
use parlance_observability::lexicon_span;
use parlance_observability::tracing_setup::events;

use crate::classify::InputClassifier;
use crate::context::ContextInferrer;
use crate::disambiguation::DisambiguationEngine;
use crate::implicit::ImplicitMeaningExtractor;
use crate::slang::SlangResolver;
use crate::typo::TypoCorrector;

/// One component per pipeline stage. Fields are public so tests and
/// embedders can swap in custom tables before handing the lexicon to
/// `PreprocessEngine::from_lexicon`.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub typo: TypoCorrector,
    pub slang: SlangResolver,
    pub implicit: ImplicitMeaningExtractor,
    pub context: ContextInferrer,
    pub classifier: InputClassifier,
    pub disambiguation: DisambiguationEngine,
}

impl Lexicon {
    /// Built-in tables with the config's overrides layered on top.
    ///
    /// Fails on the first invalid pattern, confidence, or blank field.
    pub fn from_config(config: &ParlanceConfig) -> ParlanceResult<Self> {
        let _span = lexicon_span!().entered();
        let overrides = &config.lexicon;

        let slang = SlangResolver::builtin(&overrides.slang)?;
        let typo = TypoCorrector::builtin(
            overrides
                .corrections
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
            overrides.common_words.iter().cloned(),
            &config.typo,
        )
        .with_protected(slang.single_word_terms().map(str::to_string));

        let lexicon = Self {
            typo,
            slang,
            implicit: ImplicitMeaningExtractor::builtin(&overrides.implicit_rules)?,
            context: ContextInferrer::builtin(&overrides.context_rules)?,
            classifier: InputClassifier::builtin()?,
            disambiguation: DisambiguationEngine::builtin(
                &config.disambiguation,
                &overrides.clarifications,
            )?,
        };

        events::lexicon_compiled(
            lexicon.typo.correction_count(),
            lexicon.typo.candidate_count(),
            lexicon.slang.len(),
            lexicon.implicit.len(),
            lexicon.context.len(),
            lexicon.disambiguation.table().len(),
        );

        Ok(lexicon)
    }

    /// Built-in tables with default settings.
    pub fn builtin() -> ParlanceResult<Self> {
        Self::from_config(&ParlanceConfig::default())
    }
}
