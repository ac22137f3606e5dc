//! Per-invocation document representation.

use rustc_hash::FxHashMap;

use crate::utils::normalize::normalize;

/// A document prepared for searching.
///
/// Holds the original whitespace-split words (for display) alongside a
/// normalized rendition (for matching). The original and normalized word
/// sequences always have the same length, even when a word normalizes to
/// nothing. Built once per invocation and immutable afterwards.
pub struct Document<'d> {
    /// Original words, formatting preserved.
    pub words: Vec<&'d str>,
    /// Normalized words joined by single spaces; what the matcher scans.
    pub search_text: String,
    /// Character length of each normalized word.
    pub word_lens: Vec<usize>,
    /// Start offset of each word in `search_text` -> word index.
    index: FxHashMap<usize, usize>,
}

impl<'d> Document<'d> {
    /// Build a document from raw text. Returns `None` for empty input.
    pub fn new(raw: &'d str) -> Option<Self> {
        let words: Vec<&str> = raw.split_whitespace().collect();
        if words.is_empty() {
            return None;
        }

        let mut index = FxHashMap::default();
        let mut search_text = String::with_capacity(raw.len());
        let mut word_lens = Vec::with_capacity(words.len());
        let mut offset = 0;

        for (i, word) in words.iter().enumerate() {
            let normalized = normalize(word);
            if i > 0 {
                search_text.push(' ');
            }
            index.insert(offset, i);
            search_text.push_str(&normalized);
            word_lens.push(normalized.len());
            offset += normalized.len() + 1;
        }

        Some(Self {
            words,
            search_text,
            word_lens,
            index,
        })
    }

    /// Number of words in the document.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Resolve a character offset in `search_text` to the index of the word
    /// occupying it. Offsets inside a word scan backward to the word start,
    /// so a needle matching mid-word is attributed to the whole word.
    pub fn word_at_offset(&self, offset: usize) -> usize {
        let mut off = offset;
        loop {
            if let Some(&idx) = self.index.get(&off) {
                return idx;
            }
            // Offset 0 is always a word start.
            off -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        assert!(Document::new("").is_none());
        assert!(Document::new("   \n\t ").is_none());
    }

    #[test]
    fn test_parallel_sequences() {
        let doc = Document::new("Toast, toaster! TOAD").unwrap();
        assert_eq!(doc.words, vec!["Toast,", "toaster!", "TOAD"]);
        assert_eq!(doc.search_text, "toast toaster toad");
        assert_eq!(doc.word_lens, vec![5, 7, 4]);
    }

    #[test]
    fn test_word_at_offset_resolves_word_starts() {
        let doc = Document::new("toast toaster toad").unwrap();
        assert_eq!(doc.word_at_offset(0), 0);
        assert_eq!(doc.word_at_offset(6), 1);
        assert_eq!(doc.word_at_offset(14), 2);
    }

    #[test]
    fn test_word_at_offset_resolves_mid_word() {
        let doc = Document::new("toast toaster toad").unwrap();
        // "oaster" starts at offset 7, inside word 1.
        assert_eq!(doc.word_at_offset(7), 1);
        assert_eq!(doc.word_at_offset(12), 1);
    }

    #[test]
    fn test_punctuation_only_word_keeps_slot() {
        let doc = Document::new("alpha --- beta").unwrap();
        assert_eq!(doc.word_count(), 3);
        assert_eq!(doc.word_lens, vec![5, 0, 4]);
        assert_eq!(doc.search_text, "alpha  beta");
    }
}
