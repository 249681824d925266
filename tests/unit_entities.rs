// Unit tests for entity extraction and the grouped display view.
//
// Extraction preserves source order and repeated mentions; grouping
// deduplicates by exact text within each label and sorts lexically.

use undertone::entities::grouping::group_by_label;
use undertone::entities::pattern::PatternRecognizer;
use undertone::entities::{extract_entities, Entity};

#[test]
fn empty_input_returns_empty_sequence() {
    let recognizer = PatternRecognizer::load().unwrap();
    assert!(extract_entities(&recognizer, "").unwrap().is_empty());
    assert!(extract_entities(&recognizer, "   \n").unwrap().is_empty());
}

#[test]
fn finds_person_in_founder_sentence() {
    let recognizer = PatternRecognizer::load().unwrap();
    let entities = extract_entities(&recognizer, "Steve Jobs founded Apple.").unwrap();
    assert!(
        entities
            .iter()
            .any(|e| e.label == "PERSON" && e.text == "Steve Jobs"),
        "expected a PERSON entity, got {entities:?}"
    );
    assert!(entities.iter().any(|e| e.label == "ORG" && e.text == "Apple"));
}

#[test]
fn entities_come_back_in_source_order() {
    let recognizer = PatternRecognizer::load().unwrap();
    let entities =
        extract_entities(&recognizer, "Marie Curie moved to Paris before visiting London.").unwrap();
    let texts: Vec<&str> = entities.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Marie Curie", "Paris", "London"]);
}

#[test]
fn repeated_mentions_are_not_deduplicated() {
    let recognizer = PatternRecognizer::load().unwrap();
    let entities = extract_entities(&recognizer, "Paris is lovely. Paris is busy.").unwrap();
    let paris_count = entities
        .iter()
        .filter(|e| e.label == "GPE" && e.text == "Paris")
        .count();
    assert_eq!(paris_count, 2);
}

#[test]
fn recognizes_dates() {
    let recognizer = PatternRecognizer::load().unwrap();
    let entities = extract_entities(&recognizer, "The launch happened on Jan 15, 2024.").unwrap();
    assert!(entities.iter().any(|e| e.label == "DATE"));
}

#[test]
fn recognizes_money() {
    let recognizer = PatternRecognizer::load().unwrap();
    let entities = extract_entities(&recognizer, "They raised $2,500,000 last quarter.").unwrap();
    assert!(entities
        .iter()
        .any(|e| e.label == "MONEY" && e.text.contains("2,500,000")));
}

#[test]
fn extraction_is_idempotent() {
    let recognizer = PatternRecognizer::load().unwrap();
    let input = "Grace Hopper worked in Washington for the United States Navy.";
    let first = extract_entities(&recognizer, input).unwrap();
    let second = extract_entities(&recognizer, input).unwrap();
    assert_eq!(first, second);
}

// ============================================================
// Grouped display view
// ============================================================

#[test]
fn grouping_dedupes_and_sorts_each_label() {
    let recognizer = PatternRecognizer::load().unwrap();
    let entities = extract_entities(
        &recognizer,
        "Paris and London and Paris again, plus Berlin.",
    )
    .unwrap();
    let grouped = group_by_label(&entities);
    assert_eq!(grouped["GPE"], vec!["Berlin", "London", "Paris"]);
}

#[test]
fn grouping_separates_labels() {
    let entities = vec![
        Entity {
            text: "Tokyo".to_string(),
            label: "GPE".to_string(),
        },
        Entity {
            text: "Alan Turing".to_string(),
            label: "PERSON".to_string(),
        },
    ];
    let grouped = group_by_label(&entities);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["PERSON"], vec!["Alan Turing"]);
    assert_eq!(grouped["GPE"], vec!["Tokyo"]);
}
