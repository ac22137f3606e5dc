//! Per-word relevance accumulation.

use crate::query::matcher::MatchOccurrence;

/// Cumulative per-word relevance for one invocation.
///
/// One counter per document word, starting at zero and only ever
/// incremented while the planner runs its sub-searches. Consumed once by
/// the snippet selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights {
    values: Vec<u32>,
}

impl Weights {
    pub fn new(word_count: usize) -> Self {
        Self {
            values: vec![0; word_count],
        }
    }

    /// Spread each occurrence's weight across every word it covers: the
    /// head word plus the `word_span - 1` words following it, clamped to
    /// the end of the document.
    pub fn apply(&mut self, occurrences: &[MatchOccurrence], weight: u32) {
        let n = self.values.len();
        for occ in occurrences {
            let end = (occ.word_index + occ.word_span).min(n);
            for value in &mut self.values[occ.word_index..end] {
                *value += weight;
            }
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_occurrence() {
        let mut weights = Weights::new(3);
        weights.apply(
            &[MatchOccurrence {
                word_index: 1,
                word_span: 1,
            }],
            1,
        );
        assert_eq!(weights.as_slice(), &[0, 1, 0]);
    }

    #[test]
    fn test_phrase_weight_spreads_across_span() {
        let mut weights = Weights::new(4);
        weights.apply(
            &[MatchOccurrence {
                word_index: 1,
                word_span: 2,
            }],
            2,
        );
        assert_eq!(weights.as_slice(), &[0, 2, 2, 0]);
    }

    #[test]
    fn test_weights_accumulate_across_searches() {
        let mut weights = Weights::new(2);
        let occ = MatchOccurrence {
            word_index: 0,
            word_span: 1,
        };
        weights.apply(&[occ], 2);
        weights.apply(&[occ], 1);
        assert_eq!(weights.as_slice(), &[3, 0]);
    }

    #[test]
    fn test_span_clamped_at_document_end() {
        let mut weights = Weights::new(2);
        weights.apply(
            &[MatchOccurrence {
                word_index: 1,
                word_span: 3,
            }],
            1,
        );
        assert_eq!(weights.as_slice(), &[0, 1]);
    }
}
