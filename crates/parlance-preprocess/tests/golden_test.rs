//! Golden dataset tests for parlance-preprocess.
//!
//! Each golden file holds raw utterances and the stage output expected from
//! the built-in lexicon. All samples run through the full engine.

use parlance_core::models::Axis;
use parlance_preprocess::PreprocessEngine;
use test_fixtures::load_samples;

fn engine() -> PreprocessEngine {
    PreprocessEngine::builtin().unwrap()
}

fn sample_text(sample: &serde_json::Value) -> (&str, &str) {
    let id = sample["id"].as_str().unwrap_or("?");
    let text = sample["text"].as_str().unwrap();
    (id, text)
}

#[test]
fn golden_typo_correction() {
    let engine = engine();
    for sample in &load_samples("golden/preprocess/typo_correction.json") {
        let (id, text) = sample_text(sample);
        let result = engine.process(text);

        let expected = sample["expected_output"].as_str().unwrap();
        assert_eq!(result.processed_input, expected, "Sample '{}'", id);

        let changed = sample["expected_changed"].as_bool().unwrap();
        assert_eq!(
            result.corrected_typo.is_some(),
            changed,
            "Sample '{}': corrected_typo = {:?}",
            id,
            result.corrected_typo
        );
        if changed {
            assert_eq!(result.corrected_typo.as_deref(), Some(expected));
        }
    }
}

#[test]
fn golden_slang() {
    let engine = engine();
    for sample in &load_samples("golden/preprocess/slang.json") {
        let (id, text) = sample_text(sample);
        let result = engine.process(text);
        assert_eq!(
            result.slang_meaning.as_deref(),
            sample["expected_meaning"].as_str(),
            "Sample '{}'",
            id
        );
    }
}

#[test]
fn golden_context() {
    let engine = engine();
    for sample in &load_samples("golden/preprocess/context.json") {
        let (id, text) = sample_text(sample);
        let result = engine.process(text);
        assert_eq!(
            result.inferred_context,
            sample["expected_context"].as_str().unwrap(),
            "Sample '{}'",
            id
        );
        let confidence = sample["expected_confidence"].as_f64().unwrap();
        assert!(
            (result.context_confidence - confidence).abs() < 1e-9,
            "Sample '{}': confidence {} != {}",
            id,
            result.context_confidence,
            confidence
        );
    }
}

#[test]
fn golden_classification() {
    let engine = engine();
    for sample in &load_samples("golden/preprocess/classification.json") {
        let (id, text) = sample_text(sample);
        let result = engine.process(text);

        let labels = sample["expected_labels"].as_array().unwrap();
        let confidences = sample["expected_confidences"].as_array().unwrap();
        assert_eq!(labels.len(), 3, "Sample '{}': fixture needs three labels", id);

        for (i, axis) in Axis::ALL.iter().enumerate() {
            let c = result.classification(*axis);
            assert_eq!(c.axis, *axis);
            assert_eq!(
                c.label.as_str(),
                labels[i].as_str().unwrap(),
                "Sample '{}': {} axis",
                id,
                axis.as_str()
            );
            let expected = confidences[i].as_f64().unwrap();
            assert!(
                (c.confidence - expected).abs() < 1e-9,
                "Sample '{}': {} confidence {} != {}",
                id,
                axis.as_str(),
                c.confidence,
                expected
            );
        }
    }
}

#[test]
fn golden_disambiguation() {
    let engine = engine();
    for sample in &load_samples("golden/preprocess/disambiguation.json") {
        let (id, text) = sample_text(sample);
        let result = engine.process(text);

        assert_eq!(
            result.needs_clarification,
            sample["expected_needs_clarification"].as_bool().unwrap(),
            "Sample '{}'",
            id
        );
        assert_eq!(
            result.clarification_question.is_some(),
            sample["expected_has_question"].as_bool().unwrap(),
            "Sample '{}': question = {:?}",
            id,
            result.clarification_question
        );
        if let Some(question) = sample["expected_question"].as_str() {
            assert_eq!(
                result.clarification_question.as_deref(),
                Some(question),
                "Sample '{}'",
                id
            );
        }
    }
}

#[test]
fn golden_results_are_stable_across_calls() {
    let engine = engine();
    for file in [
        "golden/preprocess/typo_correction.json",
        "golden/preprocess/disambiguation.json",
    ] {
        for sample in &load_samples(file) {
            let (_, text) = sample_text(sample);
            assert_eq!(engine.process(text), engine.process(text));
        }
    }
}
