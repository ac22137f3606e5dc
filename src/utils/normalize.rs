//! Text normalization for searching.
//!
//! All matching happens over normalized text: ASCII punctuation stripped,
//! lowercased, whitespace runs collapsed to single spaces. The
//! phrase-preserving variant keeps double quotes so phrase syntax survives
//! normalization of the query.

/// Normalize text for searching: strip ASCII punctuation, lowercase,
/// collapse whitespace runs to single spaces, trim both ends.
pub fn normalize(input: &str) -> String {
    let stripped: String = input
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    collapse_whitespace(&stripped.to_lowercase())
}

/// Same as [`normalize`], but keeps double quotes so a quoted phrase can
/// still be detected afterwards.
pub fn normalize_keep_quotes(input: &str) -> String {
    let stripped: String = input
        .chars()
        .filter(|&c| c == '"' || !c.is_ascii_punctuation())
        .collect();
    collapse_whitespace(&stripped.to_lowercase())
}

/// Strip ASCII punctuation only; case and whitespace are left alone.
pub fn strip_punctuation(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
