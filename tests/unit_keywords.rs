// Unit tests for keyword frequency ranking.
//
// The ordering contract matters as much as the counts: descending count,
// ties broken by first-seen position, never more than n entries, never a
// stopword or single-character token.

use undertone::keywords::top_keywords;
use undertone::text::{StopwordSet, Tokenizer};

fn fixtures() -> (Tokenizer, StopwordSet) {
    (Tokenizer::load().unwrap(), StopwordSet::load().unwrap())
}

#[test]
fn exact_counts_in_descending_order() {
    let (tokenizer, stopwords) = fixtures();
    let ranked = top_keywords(&tokenizer, &stopwords, "hello hello hello world world", 10).unwrap();
    assert_eq!(
        ranked,
        vec![("hello".to_string(), 3), ("world".to_string(), 2)]
    );
}

#[test]
fn excludes_stopwords() {
    let (tokenizer, stopwords) = fixtures();
    let ranked = top_keywords(
        &tokenizer,
        &stopwords,
        "the quick brown fox jumps over the lazy dog",
        10,
    )
    .unwrap();
    let words: Vec<&str> = ranked.iter().map(|(w, _)| w.as_str()).collect();
    assert!(!words.contains(&"the"));
    assert!(!words.contains(&"over"));
    assert!(words.contains(&"quick"));
    assert!(words.contains(&"fox"));
}

#[test]
fn excludes_single_character_tokens() {
    let (tokenizer, stopwords) = fixtures();
    let ranked = top_keywords(&tokenizer, &stopwords, "a b c hello world 7 x", 10).unwrap();
    for (word, _) in &ranked {
        assert!(word.chars().count() > 1, "single-char token {word:?} leaked");
    }
}

#[test]
fn never_more_than_n_entries() {
    let (tokenizer, stopwords) = fixtures();
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda";
    let ranked = top_keywords(&tokenizer, &stopwords, text, 5).unwrap();
    assert_eq!(ranked.len(), 5);

    let ranked_one = top_keywords(&tokenizer, &stopwords, text, 1).unwrap();
    assert_eq!(ranked_one.len(), 1);
}

#[test]
fn case_insensitive_counting() {
    let (tokenizer, stopwords) = fixtures();
    let ranked = top_keywords(&tokenizer, &stopwords, "Hello HELLO hello", 10).unwrap();
    assert_eq!(ranked, vec![("hello".to_string(), 3)]);
}

#[test]
fn empty_and_whitespace_input() {
    let (tokenizer, stopwords) = fixtures();
    assert!(top_keywords(&tokenizer, &stopwords, "", 10).unwrap().is_empty());
    assert!(top_keywords(&tokenizer, &stopwords, "   \n\t", 10)
        .unwrap()
        .is_empty());
}

#[test]
fn tie_break_is_first_seen_order() {
    let (tokenizer, stopwords) = fixtures();
    let ranked = top_keywords(
        &tokenizer,
        &stopwords,
        "zebra yak zebra yak xerus walrus walrus",
        10,
    )
    .unwrap();
    assert_eq!(
        ranked,
        vec![
            ("zebra".to_string(), 2),
            ("yak".to_string(), 2),
            ("walrus".to_string(), 2),
            ("xerus".to_string(), 1),
        ]
    );
}

#[test]
fn ranking_is_idempotent() {
    let (tokenizer, stopwords) = fixtures();
    let text = "apples and oranges, apples or pears; pears over apples";
    let first = top_keywords(&tokenizer, &stopwords, text, 10).unwrap();
    let second = top_keywords(&tokenizer, &stopwords, text, 10).unwrap();
    assert_eq!(first, second);
}
