// Sentiment classification — two engines, two thresholding rules.
//
// The pattern engine labels by exact-zero comparison on polarity; the
// valence engine labels by a ±0.05 dead-zone on the compound score. The
// asymmetry is intentional per-engine calibration, not a bug to reconcile.

pub mod lexicon;
pub mod pattern;
pub mod traits;
pub mod valence;

use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use self::traits::{PolarityScorer, ValenceScorer};

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Pattern-engine rule: exact zero is Neutral, any nonzero lean counts.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Valence-engine rule: a ±0.05 dead-zone around zero is Neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Sentiment::Positive
        } else if compound <= -0.05 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        };
        write!(f, "{label}")
    }
}

/// Component scores from the valence engine, all in the engine's raw units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub compound: f64,
}

impl RawScores {
    /// The defined result for input the engine never saw (empty text).
    pub fn empty_input() -> Self {
        Self {
            pos: 0.0,
            neg: 0.0,
            neu: 1.0,
            compound: 0.0,
        }
    }
}

/// One classification outcome. Request-scoped and immutable.
///
/// `subjectivity` is `None` when the engine does not measure it at all —
/// distinct from `Some(0.0)`, which means "measured as fully objective".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub polarity: f64,
    pub subjectivity: Option<f64>,
    pub sentiment: Sentiment,
    pub raw_scores: Option<RawScores>,
}

/// Classify with a polarity-style engine (engine A).
///
/// Empty or whitespace-only input short-circuits to a neutral result
/// without invoking the engine.
pub fn classify_pattern(scorer: &dyn PolarityScorer, text: &str) -> Result<AnalysisResult> {
    if text.trim().is_empty() {
        return Ok(AnalysisResult {
            polarity: 0.0,
            subjectivity: Some(0.0),
            sentiment: Sentiment::Neutral,
            raw_scores: None,
        });
    }

    let score = scorer.score(text)?;
    Ok(AnalysisResult {
        polarity: score.polarity,
        subjectivity: Some(score.subjectivity),
        sentiment: Sentiment::from_polarity(score.polarity),
        raw_scores: None,
    })
}

/// Classify with a valence-style engine (engine B).
///
/// Empty or whitespace-only input short-circuits to a neutral result with
/// raw scores {pos: 0, neg: 0, neu: 1, compound: 0}, without invoking the
/// engine. Subjectivity is always `None` for this engine.
pub fn classify_valence(scorer: &dyn ValenceScorer, text: &str) -> Result<AnalysisResult> {
    if text.trim().is_empty() {
        return Ok(AnalysisResult {
            polarity: 0.0,
            subjectivity: None,
            sentiment: Sentiment::Neutral,
            raw_scores: Some(RawScores::empty_input()),
        });
    }

    let raw = scorer.score(text)?;
    Ok(AnalysisResult {
        polarity: raw.compound,
        subjectivity: None,
        sentiment: Sentiment::from_compound(raw.compound),
        raw_scores: Some(raw),
    })
}
