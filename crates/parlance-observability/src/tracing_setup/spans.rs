//! Span definitions per operation.

/// Create a span for one preprocessing call.
#[macro_export]
macro_rules! preprocess_span {
    ($input_len:expr) => {
        tracing::debug_span!("parlance.preprocess", input_len = $input_len)
    };
}

/// Create a span for a batch of preprocessing calls.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("parlance.batch", batch_size = $batch_size)
    };
}

/// Create a span for lexicon compilation.
#[macro_export]
macro_rules! lexicon_span {
    () => {
        tracing::info_span!("parlance.lexicon")
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREPROCESS: &str = "parlance.preprocess";
    pub const BATCH: &str = "parlance.batch";
    pub const LEXICON: &str = "parlance.lexicon";
}
