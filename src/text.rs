// Shared text resources: the word tokenizer and the stopword set.
//
// Both are built once at startup and passed by reference into the analysis
// components — never mutated afterwards. A failure to build either one is
// fatal (the "model unavailable" case), not something to degrade around.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

/// Lowercasing word tokenizer.
///
/// A token is a maximal run of Unicode word characters (`\w+`), so
/// "it's" splits into "it" and "s" and punctuation never survives.
pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    pub fn load() -> Result<Self> {
        let word = Regex::new(r"\w+").context("compiling word tokenizer pattern")?;
        Ok(Self { word })
    }

    /// Tokenize into lowercased words, in source order.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.word
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// The fixed English stopword set (NLTK list via the stop-words crate).
///
/// Loaded once per process; read-only afterwards.
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn load() -> Result<Self> {
        let words: Vec<String> = stop_words::get(stop_words::LANGUAGE::English);
        anyhow::ensure!(
            !words.is_empty(),
            "stopword list is empty — the stop-words data did not load"
        );
        Ok(Self {
            words: words.into_iter().collect(),
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
