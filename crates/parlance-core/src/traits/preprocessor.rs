use crate::models::ProcessingResult;

/// Utterance preprocessing: normalize, correct, and annotate raw text.
///
/// Implementations hold only immutable tables, so a single instance can be
/// shared across threads. `process` never fails for string input.
pub trait IPreprocessor: Send + Sync {
    fn process(&self, input: &str) -> ProcessingResult;
}
