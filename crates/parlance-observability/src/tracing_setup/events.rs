//! Structured log events for key preprocessing operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a compiled lexicon and its table sizes.
pub fn lexicon_compiled(
    corrections: usize,
    candidates: usize,
    slang: usize,
    implicit_rules: usize,
    context_rules: usize,
    triggers: usize,
) {
    tracing::info!(
        event = "lexicon_compiled",
        corrections,
        candidates,
        slang,
        implicit_rules,
        context_rules,
        triggers,
        "lexicon compiled"
    );
}

/// Log a typo correction pass that changed the text.
pub fn typo_corrected(original: &str, corrected: &str) {
    tracing::debug!(
        event = "typo_corrected",
        original = %original,
        corrected = %corrected,
        "typo corrected"
    );
}

/// Log a clarification request.
pub fn clarification_requested(trigger: &str) {
    tracing::debug!(
        event = "clarification_requested",
        trigger = %trigger,
        "clarification requested"
    );
}

/// Log a primary clarification decision cleared by the short-input pass.
pub fn clarification_cleared(trigger: &str) {
    tracing::debug!(
        event = "clarification_cleared",
        trigger = %trigger,
        "short input cleared clarification"
    );
}
