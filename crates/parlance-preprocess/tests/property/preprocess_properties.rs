use parlance_core::config::TypoConfig;
use parlance_core::models::{Axis, ProcessingResult};
use parlance_preprocess::engine::normalize;
use parlance_preprocess::{levenshtein, PreprocessEngine, TypoCorrector};
use proptest::prelude::*;
use std::sync::OnceLock;

fn engine() -> &'static PreprocessEngine {
    static ENGINE: OnceLock<PreprocessEngine> = OnceLock::new();
    ENGINE.get_or_init(|| PreprocessEngine::builtin().unwrap())
}

fn corrector() -> &'static TypoCorrector {
    static CORRECTOR: OnceLock<TypoCorrector> = OnceLock::new();
    CORRECTOR.get_or_init(|| TypoCorrector::builtin(Vec::new(), Vec::new(), &TypoConfig::default()))
}

/// Short lowercase words, some of them typos, with occasional punctuation.
fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,9}[,.!?]?", 1..10).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(s in ".{0,40}") {
        prop_assert_eq!(levenshtein(&s, &s), 0);
    }

    #[test]
    fn distance_is_symmetric(a in ".{0,30}", b in ".{0,30}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn distance_bounded_by_lengths(a in ".{0,30}", b in ".{0,30}") {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = levenshtein(&a, &b);
        prop_assert!(d <= la.max(lb), "{} > max({}, {})", d, la, lb);
        prop_assert!(d >= la.abs_diff(lb), "{} < |{} - {}|", d, la, lb);
    }

    #[test]
    fn distance_triangle_inequality(a in "[a-d]{0,8}", b in "[a-d]{0,8}", c in "[a-d]{0,8}") {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn typo_correction_is_idempotent(s in sentence()) {
        let first = corrector().correct(&s);
        let second = corrector().correct(&first.text);
        prop_assert_eq!(&second.text, &first.text);
        prop_assert!(!second.changed);
    }

    #[test]
    fn corrected_text_has_single_spaces(s in "[a-z ]{0,60}") {
        let out = corrector().correct(&s);
        prop_assert!(!out.text.starts_with(' ') && !out.text.ends_with(' '));
        prop_assert!(!out.text.contains("  "));
    }

    #[test]
    fn process_never_panics_and_has_three_axes(s in "\\PC{0,80}") {
        let result = engine().process(&s);
        prop_assert_eq!(result.classifications.len(), 3);
        for (c, axis) in result.classifications.iter().zip(Axis::ALL) {
            prop_assert_eq!(c.axis, axis);
            prop_assert_eq!(c.label.axis(), axis);
            prop_assert!((0.0..=1.0).contains(&c.confidence));
        }
        prop_assert!((0.0..=1.0).contains(&result.context_confidence));
    }

    #[test]
    fn processed_input_is_normalized(s in "[A-Za-z',.!? \t]{0,80}") {
        let result = engine().process(&s);
        let p = &result.processed_input;
        prop_assert_eq!(p.trim(), p.as_str());
        prop_assert_eq!(p.to_lowercase(), p.clone());
        prop_assert!(!p.contains("  "));
    }

    #[test]
    fn clarification_flag_implies_question(s in sentence()) {
        let result = engine().process(&s);
        if result.needs_clarification {
            prop_assert!(result.clarification_question.is_some());
        }
        if result.inferred_context == "general" {
            prop_assert_eq!(result.context_confidence, 0.0);
        }
        if result.corrected_typo.is_some() {
            prop_assert_eq!(result.corrected_typo.as_deref(), Some(result.processed_input.as_str()));
        }
    }

    #[test]
    fn corrected_typo_present_iff_text_changed(s in "[a-z \t]{0,60}") {
        let result = engine().process(&s);
        let changed = result.processed_input != normalize(&s);
        prop_assert_eq!(result.corrected_typo.is_some(), changed);
    }

    #[test]
    fn blank_input_is_empty_result(s in "[ \t\n\r]{0,20}") {
        prop_assert_eq!(engine().process(&s), ProcessingResult::empty());
    }

    #[test]
    fn process_is_deterministic(s in sentence()) {
        prop_assert_eq!(engine().process(&s), engine().process(&s));
    }

    #[test]
    fn batch_matches_sequential(inputs in prop::collection::vec(sentence(), 0..12)) {
        let batch = engine().process_batch(&inputs);
        prop_assert_eq!(batch.len(), inputs.len());
        for (input, result) in inputs.iter().zip(&batch) {
            prop_assert_eq!(result, &engine().process(input));
        }
    }
}
