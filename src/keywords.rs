// Keyword frequency ranking.
//
// Lowercase, tokenize, drop stopwords and single-character tokens, count,
// and return the top N. Ordering is part of the contract: descending count,
// with ties broken by first-encountered position in the text. Naive counting
// structures make tie order incidental; tracking the first-seen index makes
// it deterministic.

use std::collections::HashMap;

use anyhow::Result;

use crate::text::{StopwordSet, Tokenizer};

/// Rank the `n` most frequent non-stopword tokens in `text`.
///
/// Empty or whitespace-only input returns an empty vec. `n` must be at
/// least 1 — a zero budget is a caller bug, not a request for nothing.
pub fn top_keywords(
    tokenizer: &Tokenizer,
    stopwords: &StopwordSet,
    text: &str,
    n: usize,
) -> Result<Vec<(String, usize)>> {
    anyhow::ensure!(n > 0, "top-n must be a positive integer, got 0");

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    // word -> (count, first-seen index)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for token in tokenizer.tokens(text) {
        if token.chars().count() <= 1 || stopwords.contains(&token) {
            continue;
        }
        let first_seen = counts.len();
        let entry = counts.entry(token).or_insert((0, first_seen));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    Ok(ranked
        .into_iter()
        .take(n)
        .map(|(word, count, _)| (word, count))
        .collect())
}
