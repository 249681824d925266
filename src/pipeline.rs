// The analysis facade.
//
// All read-only resources — the two sentiment engines, the entity
// recognizer, the tokenizer, and the stopword set — are built once here at
// startup and shared by reference for the life of the process. Every call
// after that is a pure request/response transformation; nothing below this
// layer holds state across calls.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::entities::pattern::PatternRecognizer;
use crate::entities::{self, Entity};
use crate::keywords;
use crate::sentiment::pattern::PatternEngine;
use crate::sentiment::valence::ValenceEngine;
use crate::sentiment::{self, AnalysisResult};
use crate::text::{StopwordSet, Tokenizer};

/// Everything the dashboard shows for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub pattern: AnalysisResult,
    pub valence: AnalysisResult,
    pub keywords: Vec<(String, usize)>,
    pub entities: Vec<Entity>,
}

pub struct Analyzer {
    pattern_engine: PatternEngine,
    valence_engine: ValenceEngine,
    recognizer: PatternRecognizer,
    tokenizer: Tokenizer,
    stopwords: StopwordSet,
    default_top_n: usize,
}

impl Analyzer {
    /// Load every engine and resource. Any failure here is fatal — the
    /// process must not come up with a missing scorer or recognizer.
    pub fn load(config: &Config) -> Result<Self> {
        let pattern_engine = PatternEngine::load().context("loading pattern sentiment engine")?;
        let valence_engine = ValenceEngine::load().context("loading valence sentiment engine")?;
        let recognizer = PatternRecognizer::load().context("loading entity recognizer")?;
        let tokenizer = Tokenizer::load().context("building tokenizer")?;
        let stopwords = StopwordSet::load().context("loading stopword set")?;

        info!(stopwords = stopwords.len(), "analysis resources loaded");

        Ok(Self {
            pattern_engine,
            valence_engine,
            recognizer,
            tokenizer,
            stopwords,
            default_top_n: config.top_keywords,
        })
    }

    /// Engine A: lexicon+rule polarity and subjectivity, exact-zero rule.
    pub fn classify_pattern(&self, text: &str) -> Result<AnalysisResult> {
        sentiment::classify_pattern(&self.pattern_engine, text)
    }

    /// Engine B: compound valence with components, ±0.05 dead-zone rule.
    pub fn classify_valence(&self, text: &str) -> Result<AnalysisResult> {
        sentiment::classify_valence(&self.valence_engine, text)
    }

    /// Top-n keyword frequencies, descending, first-seen tie order.
    pub fn top_keywords(&self, text: &str, n: usize) -> Result<Vec<(String, usize)>> {
        keywords::top_keywords(&self.tokenizer, &self.stopwords, text, n)
    }

    /// Named entities in source order, repeated mentions included.
    pub fn extract_entities(&self, text: &str) -> Result<Vec<Entity>> {
        entities::extract_entities(&self.recognizer, text)
    }

    /// Run all four analyses for one submission.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        Ok(AnalysisReport {
            pattern: self.classify_pattern(text)?,
            valence: self.classify_valence(text)?,
            keywords: self.top_keywords(text, self.default_top_n)?,
            entities: self.extract_entities(text)?,
        })
    }
}
