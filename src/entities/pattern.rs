// Pattern recognizer — regex and gazetteer based entity recognition.
//
// Patterns run in precedence order; a match whose span overlaps one already
// claimed by an earlier pass is dropped, so "Apple Inc." is one ORG rather
// than an ORG plus a gazetteer hit inside it. Every surviving match is
// emitted, including repeated mentions of the same text, and the combined
// result is sorted by span start to restore source order.

use anyhow::{Context, Result};
use regex::Regex;

use super::traits::EntityRecognizer;
use super::Entity;

/// Label categories follow the usual NER conventions: PERSON, ORG,
/// GPE (countries/cities/states), DATE, MONEY.
pub struct PatternRecognizer {
    /// (label, pattern), highest precedence first.
    patterns: Vec<(&'static str, Regex)>,
}

impl PatternRecognizer {
    /// Compile the pattern set. Fatal on failure — a recognizer that can't
    /// build its patterns is the unavailable-model case.
    pub fn load() -> Result<Self> {
        let sources: &[(&str, &str)] = &[
            (
                "DATE",
                r"\b(?:\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}[/-]\d{1,2}[/-]\d{1,2}|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4})\b",
            ),
            (
                "MONEY",
                r"\$\s*\d+(?:,\d{3})*(?:\.\d{2})?|\b\d+(?:,\d{3})*(?:\.\d{2})?\s*(?:USD|EUR|GBP|dollars?|euros?|pounds?)\b",
            ),
            // Suffix form first so "Apple Inc." outranks the bare gazetteer "Apple".
            (
                "ORG",
                r"\b[A-Z][A-Za-z]*(?:\s+[A-Z][a-z]+)*\s+(?:Inc|LLC|Corp|Corporation|Ltd|Limited|Company|Co|Group|Institute|University|College)\b\.?",
            ),
            (
                "ORG",
                r"\b(?:Apple|Google|Microsoft|Amazon|Netflix|Tesla|Intel|Nvidia|Samsung|Sony|Oracle|Adobe|Boeing|Toyota|Spotify|Airbnb|Uber|NASA|UNESCO)\b",
            ),
            (
                "GPE",
                r"\b(?:United States|United Kingdom|New York|Los Angeles|San Francisco|California|Texas|London|Paris|Tokyo|Beijing|Berlin|Madrid|Rome|Washington|Chicago|Boston|Seattle|Sydney|Toronto|India|China|Japan|France|Germany|Canada|Australia|Brazil|Egypt|Kenya)\b",
            ),
            // Two or more capitalized words — the loosest pattern runs last.
            ("PERSON", r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b"),
        ];

        let mut patterns = Vec::with_capacity(sources.len());
        for &(label, source) in sources {
            let regex = Regex::new(source)
                .with_context(|| format!("compiling {label} entity pattern"))?;
            patterns.push((label, regex));
        }

        Ok(Self { patterns })
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        // (start, end, label, text) for claimed spans
        let mut spans: Vec<(usize, usize, &'static str, String)> = Vec::new();

        for (label, pattern) in &self.patterns {
            for m in pattern.find_iter(text) {
                let overlaps = spans
                    .iter()
                    .any(|&(start, end, _, _)| m.start() < end && start < m.end());
                if overlaps {
                    continue;
                }
                spans.push((m.start(), m.end(), *label, m.as_str().to_string()));
            }
        }

        spans.sort_by_key(|&(start, _, _, _)| start);

        Ok(spans
            .into_iter()
            .map(|(_, _, label, text)| Entity {
                text,
                label: label.to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_org_claims_gazetteer_span() {
        let recognizer = PatternRecognizer::load().unwrap();
        let entities = recognizer.recognize("Apple Inc. hired engineers.").unwrap();
        assert_eq!(entities[0].label, "ORG");
        assert!(entities[0].text.starts_with("Apple Inc"));
        assert_eq!(
            entities.iter().filter(|e| e.text.contains("Apple")).count(),
            1
        );
    }

    #[test]
    fn source_order_is_preserved() {
        let recognizer = PatternRecognizer::load().unwrap();
        let entities = recognizer
            .recognize("Steve Jobs founded Apple in California.")
            .unwrap();
        let texts: Vec<&str> = entities.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Steve Jobs", "Apple", "California"]);
    }

    #[test]
    fn dates_and_money() {
        let recognizer = PatternRecognizer::load().unwrap();
        let entities = recognizer
            .recognize("The deal closed on Jan 15, 2024 for $12,000.50.")
            .unwrap();
        assert!(entities.iter().any(|e| e.label == "DATE"));
        assert!(entities.iter().any(|e| e.label == "MONEY"));
    }
}
