//! Boyer-Moore substring search over the normalized document text.
//!
//! The matcher precomputes the two classic skip tables per needle: the
//! bad-character table (last index of each alphabet symbol in the needle)
//! and the good-suffix table (safe shift for each matched-suffix length).
//! Preprocessing is O(alphabet + needle); the scan skips impossible
//! alignments without ever missing a match.

use crate::document::Document;

/// A single needle occurrence, resolved to word positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOccurrence {
    /// Index of the word containing the match start.
    pub word_index: usize,
    /// Number of words the needle spans (>= 1).
    pub word_span: usize,
}

/// Boyer-Moore matcher bound to one document.
///
/// Stateless across calls; each [`search`](Self::search) builds its own
/// tables for the given needle.
pub struct PatternMatcher<'a, 'd> {
    doc: &'a Document<'d>,
    alphabet_size: usize,
}

impl<'a, 'd> PatternMatcher<'a, 'd> {
    pub fn new(doc: &'a Document<'d>, alphabet_size: usize) -> Self {
        Self { doc, alphabet_size }
    }

    /// Find every occurrence of `needle` in the document's search text.
    ///
    /// A needle may match in the middle of a document word; the occurrence
    /// is attributed to that whole word. Returns an empty vec when the
    /// needle is empty or longer than the haystack.
    pub fn search(&self, needle: &str) -> Vec<MatchOccurrence> {
        let needle_bytes = needle.as_bytes();
        let haystack = self.doc.search_text.as_bytes();
        let m = needle_bytes.len();
        let h = haystack.len();
        if m == 0 || m > h {
            return Vec::new();
        }

        let word_span = needle.split_whitespace().count().max(1);
        let bad_char = build_bad_char_table(needle_bytes, self.alphabet_size);
        let good_suffix = build_good_suffix_table(needle_bytes);

        let mut matches = Vec::new();
        let mut i = 0usize;
        while i + m <= h {
            // Compare right to left at this alignment.
            let mut j = m as isize - 1;
            while j >= 0 && needle_bytes[j as usize] == haystack[i + j as usize] {
                j -= 1;
            }

            if j < 0 {
                matches.push(MatchOccurrence {
                    word_index: self.doc.word_at_offset(i),
                    word_span,
                });
                i += good_suffix[0];
            } else {
                let j = j as usize;
                let symbol = haystack[i + j] as usize;
                // Symbols outside the alphabet behave as "not in needle".
                let last = bad_char.get(symbol).copied().unwrap_or(-1);
                let shift = (good_suffix[j + 1] as isize).max(j as isize - last);
                i += shift as usize;
            }
        }
        matches
    }
}

/// Last index at which each alphabet symbol occurs in the needle, -1 when
/// absent.
fn build_bad_char_table(needle: &[u8], alphabet_size: usize) -> Vec<isize> {
    let mut table = vec![-1isize; alphabet_size];
    for (j, &byte) in needle.iter().enumerate() {
        if (byte as usize) < alphabet_size {
            table[byte as usize] = j as isize;
        }
    }
    table
}

/// Good-suffix shift table via the standard suffix-border preprocessing.
///
/// `shift[j]` is how far the alignment may advance after a mismatch that
/// follows matching the needle suffix starting at `j`; `shift[0]` is the
/// advance after a full match. The first pass records the widest border of
/// each suffix and the interior case shifts; the second fills unset entries
/// with the best prefix-as-suffix shift.
fn build_good_suffix_table(needle: &[u8]) -> Vec<usize> {
    let m = needle.len();
    let mut borders = vec![0usize; m + 2];
    let mut shift = vec![0usize; m + 2];

    let mut i = m;
    let mut j = m + 1;
    borders[i] = j;
    while i > 0 {
        while j <= m && needle[i - 1] != needle[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = borders[j];
        }
        i -= 1;
        j -= 1;
        borders[i] = j;
    }

    let mut j = borders[0];
    for i in 0..=m {
        if shift[i] == 0 {
            shift[i] = j;
        }
        if i == j {
            j = borders[j];
        }
    }
    shift
}
