//! End-to-end tests for PreprocessEngine: pipeline properties, blank input,
//! batch processing, configuration overrides and construction failures.

use parlance_core::config::ParlanceConfig;
use parlance_core::errors::{ConfigError, ParlanceError};
use parlance_core::models::{Axis, Label, ProcessingResult};
use parlance_core::traits::IPreprocessor;
use parlance_preprocess::PreprocessEngine;

fn engine() -> PreprocessEngine {
    PreprocessEngine::builtin().unwrap()
}

fn engine_with(toml: &str) -> PreprocessEngine {
    let config = ParlanceConfig::from_toml(toml).unwrap();
    PreprocessEngine::new(&config).unwrap()
}

fn build_error(toml: &str) -> ConfigError {
    let config = ParlanceConfig::from_toml(toml).unwrap();
    match PreprocessEngine::new(&config) {
        Err(ParlanceError::Config(e)) => e,
        Err(other) => panic!("expected config error, got {other}"),
        Ok(_) => panic!("engine built from invalid config"),
    }
}

// ── Pipeline properties ─────────────────────────────────────────────────────

#[test]
fn direct_table_correction_leaves_other_tokens() {
    let result = engine().process("I thier dog");
    assert_eq!(result.processed_input, "i their dog");
    assert_eq!(result.corrected_typo.as_deref(), Some("i their dog"));
}

#[test]
fn slang_meaning_resolved() {
    let result = engine().process("idk what to do");
    assert_eq!(result.slang_meaning.as_deref(), Some("I don't know"));
}

#[test]
fn highest_confidence_context_wins() {
    let result = engine().process("I have a deadline and I'm stressed");
    assert_eq!(result.inferred_context, "work_stress");
    assert!((result.context_confidence - 0.8).abs() < 1e-9);
}

#[test]
fn hello_gets_default_classifications() {
    let result = engine().process("hello");
    let expected = [
        (Axis::Literality, Label::Literal, 0.8),
        (Axis::Tone, Label::Serious, 0.7),
        (Axis::Directness, Label::Direct, 0.7),
    ];
    for (axis, label, confidence) in expected {
        let c = result.classification(axis);
        assert_eq!(c.label, label);
        assert!((c.confidence - confidence).abs() < 1e-9);
    }
}

#[test]
fn overwhelmed_asks_about_work_relationships_life() {
    let result = engine().process("I feel overwhelmed");
    assert!(result.needs_clarification);
    let question = result.clarification_question.unwrap().to_lowercase();
    assert!(question.contains("work"), "{question}");
    assert!(question.contains("relationships"), "{question}");
    assert!(question.contains("life"), "{question}");
}

#[test]
fn fine_asks_the_fine_question() {
    let result = engine().process("fine");
    assert!(result.needs_clarification);
    assert!(result
        .clarification_question
        .unwrap()
        .starts_with("When you say fine"));
}

#[test]
fn implicit_meaning_and_undertone_surface_together() {
    let result = engine().process("idk man");
    assert_eq!(result.implicit_meaning.as_deref(), Some("uncertain"));
    assert_eq!(result.implicit_undertone.as_deref(), Some("confused"));
}

#[test]
fn typo_correction_is_idempotent_on_corrected_text() {
    let engine = engine();
    let first = engine.process("teh deadline is tomorrow and im stressed");
    let second = engine.process(&first.processed_input);
    assert_eq!(second.processed_input, first.processed_input);
    assert!(second.corrected_typo.is_none());
}

#[test]
fn whitespace_collapse_counts_as_correction() {
    let result = engine().process("  hello    there ");
    assert_eq!(result.processed_input, "hello there");
    assert_eq!(result.corrected_typo.as_deref(), Some("hello there"));

    // Outer whitespace is trimmed by normalization, not by correction.
    assert!(engine().process("  hello there ").corrected_typo.is_none());
}

#[test]
fn transposed_short_word_corrected() {
    let result = engine().process("a stroy");
    assert_eq!(result.processed_input, "a story");
    assert_eq!(result.corrected_typo.as_deref(), Some("a story"));
}

#[test]
fn always_three_classifications_in_axis_order() {
    let engine = engine();
    for text in ["", "lol", "work is killing me", "could you maybe help", "🙂 ok"] {
        let result = engine.process(text);
        let axes: Vec<Axis> = result.classifications.iter().map(|c| c.axis).collect();
        assert_eq!(axes, Axis::ALL.to_vec(), "input {text:?}");
        for c in &result.classifications {
            assert_eq!(c.label.axis(), c.axis);
        }
    }
}

// ── Blank input ─────────────────────────────────────────────────────────────

#[test]
fn blank_input_short_circuits() {
    let engine = engine();
    for text in ["", "   ", "\t\n"] {
        let result = engine.process(text);
        assert_eq!(result, ProcessingResult::empty(), "input {text:?}");
        assert_eq!(result.processed_input, "");
        assert!(!result.needs_clarification);
        assert!(result.clarification_question.is_none());
        assert!(result.slang_meaning.is_none());
        assert_eq!(result.inferred_context, "general");
    }
}

// ── Short-input override ────────────────────────────────────────────────────

#[test]
fn short_input_override_clears_trigger_but_keeps_question() {
    // "nice" hits the primary trigger, then the short-input pass finds no
    // special case and clears the flag.
    let result = engine().process("nice");
    assert!(!result.needs_clarification);
    assert!(result.clarification_question.is_some());
}

#[test]
fn longer_input_keeps_primary_trigger() {
    let result = engine().process("that was really nice of them");
    assert!(result.needs_clarification);
    assert!(result.clarification_question.is_some());
}

// ── Batch ───────────────────────────────────────────────────────────────────

#[test]
fn batch_matches_sequential_in_order() {
    let engine = engine();
    let inputs = vec![
        "I thier dog",
        "",
        "idk what to do",
        "I feel overwhelmed",
        "my girlfriend broke up with me",
        "lol that was so funny",
        "fine",
    ];
    let batch = engine.process_batch(&inputs);
    assert_eq!(batch.len(), inputs.len());
    for (input, result) in inputs.iter().zip(&batch) {
        assert_eq!(*result, engine.process(input), "input {input:?}");
    }
}

#[test]
fn batch_accepts_owned_strings() {
    let inputs: Vec<String> = (0..50).map(|i| format!("teh test number {i}")).collect();
    let batch = engine().process_batch(&inputs);
    assert_eq!(batch.len(), 50);
    assert!(batch.iter().all(|r| r.processed_input.starts_with("the test")));
}

#[test]
fn engine_usable_through_trait_object() {
    let boxed: Box<dyn IPreprocessor> = Box::new(engine());
    assert_eq!(boxed.process("idk").slang_meaning.as_deref(), Some("I don't know"));
}

#[test]
fn engine_shared_across_threads() {
    let engine = std::sync::Arc::new(engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || engine.process("I thier dog").processed_input)
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "i their dog");
    }
}

// ── Configuration overrides ─────────────────────────────────────────────────

#[test]
fn extra_correction_applies() {
    let engine = engine_with(
        r#"
[lexicon.corrections]
wnat = "want"
"#,
    );
    assert_eq!(engine.process("i wnat pizza").processed_input, "i want pizza");
}

#[test]
fn extra_common_word_and_context_rule() {
    let toml = r#"
[lexicon]
common_words = ["gaming"]

[[lexicon.context_rules]]
pattern = "\\bgaming\\b"
label = "hobby"
confidence = 0.95
"#;
    let result = engine_with(toml).process("gaming all night");
    assert_eq!(result.processed_input, "gaming all night");
    assert_eq!(result.inferred_context, "hobby");
    assert!((result.context_confidence - 0.95).abs() < 1e-9);
}

#[test]
fn extra_slang_and_replaced_meaning() {
    let toml = r#"
[[lexicon.slang]]
term = "gg"
meaning = "good game"

[[lexicon.slang]]
term = "idk"
meaning = "i do not know"
"#;
    let engine = engine_with(toml);
    assert_eq!(
        engine.process("gg everyone").slang_meaning.as_deref(),
        Some("good game")
    );
    assert_eq!(
        engine.process("idk").slang_meaning.as_deref(),
        Some("i do not know")
    );
}

#[test]
fn extra_implicit_rule_has_lowest_priority() {
    let toml = r#"
[[lexicon.implicit_rules]]
pattern = "pizza"
meaning = "craving"
undertone = "hungry"
"#;
    let engine = engine_with(toml);
    let plain = engine.process("i want pizza");
    assert_eq!(plain.implicit_meaning.as_deref(), Some("craving"));
    assert_eq!(plain.implicit_undertone.as_deref(), Some("hungry"));

    // A built-in rule still takes precedence.
    let built_in = engine.process("idk i want pizza");
    assert_eq!(built_in.implicit_meaning.as_deref(), Some("uncertain"));
}

#[test]
fn untemplated_clarification_uses_fallback_question() {
    let toml = r#"
[disambiguation]
fallback_question = "Say more?"

[[lexicon.clarifications]]
trigger = "stuff"
"#;
    let result = engine_with(toml).process("lots of stuff going on");
    assert!(result.needs_clarification);
    assert_eq!(result.clarification_question.as_deref(), Some("Say more?"));
}

#[test]
fn max_distance_zero_disables_fuzzy_fallback() {
    let engine = engine_with("[typo]\nmax_distance = 0\n");
    assert_eq!(engine.process("the deadlime").processed_input, "the deadlime");
    // Direct table still applies.
    assert_eq!(engine.process("teh").processed_input, "the");
}

#[test]
fn raised_min_fuzzy_len_skips_short_words() {
    let engine = engine_with("[typo]\nmin_fuzzy_len = 6\n");
    assert_eq!(engine.process("a stroy").processed_input, "a stroy");
    assert_eq!(engine.process("the deadlime").processed_input, "the deadline");
}

// ── Construction failures ───────────────────────────────────────────────────

#[test]
fn invalid_override_pattern_fails_construction() {
    let err = build_error(
        r#"
[[lexicon.context_rules]]
pattern = "(unclosed"
label = "broken"
confidence = 0.5
"#,
    );
    match err {
        ConfigError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn out_of_range_confidence_fails_construction() {
    let err = build_error(
        r#"
[[lexicon.context_rules]]
pattern = "x"
label = "loud"
confidence = 1.5
"#,
    );
    assert!(matches!(err, ConfigError::ConfidenceOutOfRange { .. }));
}

#[test]
fn blank_slang_term_fails_construction() {
    let err = build_error(
        r#"
[[lexicon.slang]]
term = "  "
meaning = "nothing"
"#,
    );
    assert!(matches!(err, ConfigError::EmptyField { .. }));
}

// ── Serialization ───────────────────────────────────────────────────────────

#[test]
fn result_serializes_with_camel_case_fields() {
    let result = engine().process("I feel overwhelmed");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["processedInput"], "i feel overwhelmed");
    assert_eq!(json["needsClarification"], true);
    assert!(json["clarificationQuestion"].is_string());
    assert!(json["correctedTypo"].is_null());
    assert_eq!(json["classifications"].as_array().unwrap().len(), 3);

    let back: ProcessingResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
