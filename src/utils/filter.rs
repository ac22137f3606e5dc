//! Stop-word and duplicate filtering for query terms.
//!
//! Both filters normalize their input first and preserve the order of the
//! words they keep.

use crate::utils::normalize::normalize;

/// Common words that never contribute to relevance on their own.
const STOP_WORDS: &[&str] = &[
    "a", "and", "be", "for", "from", "has", "i", "in", "is", "it", "of", "on", "to", "the",
];

/// Whether `word` is in the fixed stop-word set.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Remove stop words from `input`, preserving the order of the rest.
pub fn remove_stop_words(input: &str) -> String {
    normalize(input)
        .split_whitespace()
        .filter(|w| !is_stop_word(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove repeated words, keeping the first occurrence of each.
pub fn dedupe_words(input: &str) -> String {
    let normalized = normalize(input);
    let mut kept: Vec<&str> = Vec::new();
    for word in normalized.split_whitespace() {
        if !kept.contains(&word) {
            kept.push(word);
        }
    }
    kept.join(" ")
}
