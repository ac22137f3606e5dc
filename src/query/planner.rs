//! Query planning: phrase vs. term disambiguation and weight assignment.
//!
//! The planner decides, once per invocation, how the raw query is searched:
//! as a quoted phrase, as one exact as-typed needle, or term by term. Phrase
//! and exact multi-word matches score double; per-term fallback matches
//! score single. Only the first quoted phrase is treated specially; any
//! later quotes are stripped as ordinary punctuation.

use std::sync::OnceLock;

use regex::Regex;

use crate::document::Document;
use crate::query::matcher::PatternMatcher;
use crate::query::weights::Weights;
use crate::utils::filter::{dedupe_words, remove_stop_words};
use crate::utils::normalize::{normalize_keep_quotes, strip_punctuation};

/// Pattern for a double-quoted phrase. Unbalanced quotes simply fail to
/// match and fall through to non-phrase handling.
fn phrase_pattern() -> &'static Regex {
    static PHRASE: OnceLock<Regex> = OnceLock::new();
    PHRASE.get_or_init(|| Regex::new("\"[^\"\r\n]*\"").expect("phrase pattern is valid"))
}

/// Run the query against the document, producing per-word weights.
///
/// Returns `None` when nothing in the query matches; the caller then falls
/// back to the default snippet.
pub fn plan(doc: &Document<'_>, query: &str, alphabet_size: usize) -> Option<Weights> {
    let matcher = PatternMatcher::new(doc, alphabet_size);
    let mut weights = Weights::new(doc.word_count());
    let query = normalize_keep_quotes(query);

    if let Some(found) = phrase_pattern().find(&query) {
        let phrase = strip_punctuation(found.as_str());
        let query = strip_punctuation(&query);

        let occurrences = matcher.search(&phrase);
        if occurrences.is_empty() {
            // Phrase never occurs: drop the quotes and search term by term.
            let terms = dedupe_words(&remove_stop_words(&query));
            if !search_terms(&matcher, &terms, &mut weights) {
                return None;
            }
        } else {
            weights.apply(&occurrences, 2);
            if phrase.len() != query.len() {
                // Credit the words outside the phrase at single strength.
                // An empty remainder after filtering runs no extra search.
                let rest = query.replace(&phrase, "");
                let rest = dedupe_words(&remove_stop_words(&rest));
                search_terms(&matcher, &rest, &mut weights);
            }
        }
    } else {
        let cleaned = dedupe_words(&remove_stop_words(&strip_punctuation(&query)));
        if cleaned.is_empty() {
            return None;
        }

        let occurrences = matcher.search(&cleaned);
        if occurrences.is_empty() {
            if !search_terms(&matcher, &cleaned, &mut weights) {
                return None;
            }
        } else {
            // An exact as-typed match of more than one word scores double;
            // a single word matching exactly is no stronger than a term hit.
            let weight = if cleaned.contains(' ') { 2 } else { 1 };
            weights.apply(&occurrences, weight);
        }
    }

    Some(weights)
}

/// Search each term separately at single weight, mutating `weights` on the
/// way. Returns whether at least one term matched.
fn search_terms(matcher: &PatternMatcher<'_, '_>, terms: &str, weights: &mut Weights) -> bool {
    let mut matched = false;
    for term in terms.split_whitespace() {
        let occurrences = matcher.search(term);
        if !occurrences.is_empty() {
            weights.apply(&occurrences, 1);
            matched = true;
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights_for(doc: &str, query: &str) -> Option<Vec<u32>> {
        let doc = Document::new(doc).unwrap();
        plan(&doc, query, 128).map(|w| w.as_slice().to_vec())
    }

    #[test]
    fn test_single_term() {
        assert_eq!(
            weights_for("toast toaster toad", "toast"),
            Some(vec![1, 1, 0])
        );
    }

    #[test]
    fn test_single_term_suffix_only() {
        assert_eq!(
            weights_for("toast toaster toad", "toaster"),
            Some(vec![0, 1, 0])
        );
    }

    #[test]
    fn test_unquoted_pair_matches_as_exact_needle() {
        assert_eq!(
            weights_for("toast toaster toad", "toast toaster"),
            Some(vec![2, 2, 0])
        );
    }

    #[test]
    fn test_quoted_phrase_doubles() {
        assert_eq!(
            weights_for("toast toaster toad", "\"toast toaster\""),
            Some(vec![2, 2, 0])
        );
    }

    #[test]
    fn test_reversed_phrase_falls_back_to_terms() {
        // The phrase never occurs, so each term scores singly; "toast" also
        // hits inside "toaster".
        assert_eq!(
            weights_for("toast toaster toad", "\"toaster toast\""),
            Some(vec![1, 2, 0])
        );
    }

    #[test]
    fn test_single_word_phrase_doubles() {
        assert_eq!(
            weights_for("toast toaster toad", "\"toaster\""),
            Some(vec![0, 2, 0])
        );
    }

    #[test]
    fn test_phrase_with_leftover_terms() {
        assert_eq!(
            weights_for("toast toaster toad", "\"toast toaster\" toad"),
            Some(vec![2, 2, 1])
        );
    }

    #[test]
    fn test_phrase_with_stop_word_remainder_is_noop() {
        // The leftover words vanish after stop-word removal; no extra
        // search runs and no weight appears outside the phrase.
        assert_eq!(
            weights_for("toast toaster toad", "\"toast toaster\" the it"),
            Some(vec![2, 2, 0])
        );
    }

    #[test]
    fn test_no_match_signals_none() {
        assert_eq!(weights_for("toast toaster toad", "butter"), None);
    }

    #[test]
    fn test_stop_words_only_query_matches_nothing() {
        assert_eq!(weights_for("the toast is here", "the is"), None);
    }

    #[test]
    fn test_stop_words_removed_from_terms() {
        // "the" appears in the document but never contributes unquoted.
        assert_eq!(weights_for("the toast", "the toast"), Some(vec![0, 1]));
    }

    #[test]
    fn test_unbalanced_quote_treated_as_no_phrase() {
        assert_eq!(
            weights_for("toast toaster toad", "\"toast"),
            Some(vec![1, 1, 0])
        );
    }

    #[test]
    fn test_duplicate_terms_count_once() {
        assert_eq!(
            weights_for("toast toaster toad", "toad toad toad"),
            Some(vec![0, 0, 1])
        );
    }
}
