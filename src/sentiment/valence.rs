// Valence engine — the social-text-tuned compound scorer (engine B).
//
// Tokens are looked up in a valence lexicon on a roughly [-4, 4] scale.
// A booster directly before a sentiment word shifts its magnitude; a
// negation within the three preceding tokens inverts and damps it. The
// compound score normalizes the valence sum into [-1, 1]; pos/neg/neu are
// magnitude shares with every non-lexicon token counting as one neutral
// unit. No subjectivity is produced anywhere in this engine.

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use super::lexicon::{BOOSTERS, NEGATIONS, VALENCE_LEXICON};
use super::traits::ValenceScorer;
use super::RawScores;
use crate::text::Tokenizer;

/// How far back a negation reaches, in tokens.
const NEGATION_WINDOW: usize = 3;

/// Negation inverts with damping — "not great" lands short of "-great".
const NEGATION_SCALAR: f64 = -0.74;

/// Normalization constant for the compound score: sum / sqrt(sum^2 + ALPHA).
const ALPHA: f64 = 15.0;

pub struct ValenceEngine {
    tokenizer: Tokenizer,
    lexicon: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    boosters: HashMap<&'static str, f64>,
}

impl ValenceEngine {
    /// Build the engine's read-only tables. Fatal on failure.
    pub fn load() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::load()?,
            lexicon: VALENCE_LEXICON.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        })
    }
}

impl ValenceScorer for ValenceEngine {
    fn score(&self, text: &str) -> Result<RawScores> {
        let tokens = self.tokenizer.tokens(text);

        let mut total = 0.0_f64;
        let mut pos_sum = 0.0_f64;
        let mut neg_sum = 0.0_f64;
        let mut neu_count = 0.0_f64;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.lexicon.get(token.as_str()) else {
                neu_count += 1.0;
                continue;
            };

            let mut valence = base;

            if i > 0 {
                if let Some(&increment) = self.boosters.get(tokens[i - 1].as_str()) {
                    valence += increment * valence.signum();
                }
            }

            let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|t| self.negations.contains(t.as_str()));
            if negated {
                valence *= NEGATION_SCALAR;
            }

            total += valence;
            if valence > 0.0 {
                pos_sum += valence + 1.0;
            } else if valence < 0.0 {
                neg_sum += valence.abs() + 1.0;
            } else {
                neu_count += 1.0;
            }
        }

        // Punctuation-only text trims non-empty but produces zero tokens.
        let denominator = pos_sum + neg_sum + neu_count;
        if denominator == 0.0 {
            return Ok(RawScores::empty_input());
        }

        let compound = (total / (total * total + ALPHA).sqrt()).clamp(-1.0, 1.0);

        Ok(RawScores {
            pos: pos_sum / denominator,
            neg: neg_sum / denominator,
            neu: neu_count / denominator,
            compound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factual_text_is_fully_neutral() {
        let engine = ValenceEngine::load().unwrap();
        let raw = engine.score("The meeting is scheduled.").unwrap();
        assert_eq!(raw.compound, 0.0);
        assert_eq!(raw.pos, 0.0);
        assert_eq!(raw.neg, 0.0);
        assert_eq!(raw.neu, 1.0);
    }

    #[test]
    fn punctuation_only_matches_empty_defaults() {
        let engine = ValenceEngine::load().unwrap();
        let raw = engine.score("?!?!").unwrap();
        assert_eq!(raw, RawScores::empty_input());
    }

    #[test]
    fn negation_pushes_negative() {
        let engine = ValenceEngine::load().unwrap();
        let raw = engine.score("not good").unwrap();
        assert!(raw.compound <= -0.05, "got {}", raw.compound);
    }

    #[test]
    fn booster_raises_compound() {
        let engine = ValenceEngine::load().unwrap();
        let plain = engine.score("good").unwrap();
        let boosted = engine.score("really good").unwrap();
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn component_shares_sum_to_one() {
        let engine = ValenceEngine::load().unwrap();
        let raw = engine.score("I love this but the ending was terrible").unwrap();
        let sum = raw.pos + raw.neg + raw.neu;
        assert!((sum - 1.0).abs() < 1e-9, "shares sum to {sum}");
    }

    #[test]
    fn compound_stays_in_range() {
        let engine = ValenceEngine::load().unwrap();
        let raw = engine
            .score("love love love best awesome great wonderful amazing")
            .unwrap();
        assert!(raw.compound > 0.9);
        assert!(raw.compound <= 1.0);
    }
}
