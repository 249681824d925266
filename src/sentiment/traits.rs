// Sentiment scorer traits — the swap-ready abstractions.
//
// The classification logic in `sentiment::classify_pattern` and
// `sentiment::classify_valence` only depends on these traits, so either
// built-in engine can be replaced by any other backing implementation
// (a different lexicon, an ONNX model) without touching the thresholds.

use anyhow::Result;

use super::RawScores;

/// What a polarity-style engine produces for one text.
#[derive(Debug, Clone, Copy)]
pub struct PolarityScore {
    /// -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,
}

/// Engine A shape: polarity plus subjectivity.
pub trait PolarityScorer: Send + Sync {
    /// Score one text. Never called with empty/whitespace-only input —
    /// the classifier handles that branch before reaching the engine.
    fn score(&self, text: &str) -> Result<PolarityScore>;
}

/// Engine B shape: compound valence with pos/neg/neu components.
/// Subjectivity is deliberately absent from this interface.
pub trait ValenceScorer: Send + Sync {
    /// Score one text. Never called with empty/whitespace-only input.
    fn score(&self, text: &str) -> Result<RawScores>;
}
