// Named entity extraction.
//
// The recognizer is a black box behind the EntityRecognizer trait; this
// layer only handles the empty-input branch and keeps the model's
// left-to-right order. Repeated mentions are preserved here — the grouped
// display view is where deduplication happens.

pub mod grouping;
pub mod pattern;
pub mod traits;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use self::traits::EntityRecognizer;

/// One recognized span: the verbatim text and its category code
/// (PERSON, ORG, GPE, DATE, MONEY).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

/// Extract entities from `text` in source order.
///
/// Empty or whitespace-only input returns an empty vec without invoking
/// the recognizer.
pub fn extract_entities(recognizer: &dyn EntityRecognizer, text: &str) -> Result<Vec<Entity>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    recognizer.recognize(text)
}
