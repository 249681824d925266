// Pattern engine — the lexicon+rule polarity scorer (engine A).
//
// Each token is looked up in a (polarity, subjectivity) lexicon. An
// intensifier directly before a sentiment word multiplies its polarity; a
// negation within the two preceding tokens flips and damps it. The text
// score is the mean over matched words, so a text with no lexicon hits
// scores exactly 0.0 — which the classifier maps to Neutral.

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use super::lexicon::{INTENSIFIERS, NEGATIONS, POLARITY_LEXICON};
use super::traits::{PolarityScore, PolarityScorer};
use crate::text::Tokenizer;

/// How far back a negation reaches, in tokens.
const NEGATION_WINDOW: usize = 2;

/// Negation flips polarity and damps it rather than fully inverting —
/// "not good" is mildly negative, not the mirror image of "good".
const NEGATION_SCALAR: f64 = -0.5;

pub struct PatternEngine {
    tokenizer: Tokenizer,
    lexicon: HashMap<&'static str, (f64, f64)>,
    negations: HashSet<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

impl PatternEngine {
    /// Build the engine's read-only tables. Fatal on failure — there is no
    /// degraded mode for a scorer that didn't load.
    pub fn load() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::load()?,
            lexicon: POLARITY_LEXICON
                .iter()
                .map(|&(w, p, s)| (w, (p, s)))
                .collect(),
            negations: NEGATIONS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        })
    }
}

impl PolarityScorer for PatternEngine {
    fn score(&self, text: &str) -> Result<PolarityScore> {
        let tokens = self.tokenizer.tokens(text);

        let mut polarities: Vec<f64> = Vec::new();
        let mut subjectivities: Vec<f64> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&(base_polarity, subjectivity)) = self.lexicon.get(token.as_str()) else {
                continue;
            };

            let mut polarity = base_polarity;

            if i > 0 {
                if let Some(&multiplier) = self.intensifiers.get(tokens[i - 1].as_str()) {
                    polarity *= multiplier;
                }
            }

            let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|t| self.negations.contains(t.as_str()));
            if negated {
                polarity *= NEGATION_SCALAR;
            }

            polarities.push(polarity.clamp(-1.0, 1.0));
            subjectivities.push(subjectivity);
        }

        if polarities.is_empty() {
            return Ok(PolarityScore {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let polarity = polarities.iter().sum::<f64>() / polarities.len() as f64;
        let subjectivity = subjectivities.iter().sum::<f64>() / subjectivities.len() as f64;

        Ok(PolarityScore {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        })
    }
}
