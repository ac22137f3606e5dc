//! Top-level highlighting pipeline.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::query::planner;
use crate::snippet::render::{render, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use crate::snippet::selector;
use crate::utils::normalize::normalize;

/// Configuration for a [`Highlighter`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HighlighterConfig {
    /// Maximum character length of the returned excerpt.
    pub snippet_budget: usize,
    /// Bad-character table bound. Symbols at or above this value never
    /// participate in skip-table lookups; it must exceed the highest code
    /// point in normalized text for those symbols to speed up the scan.
    pub alphabet_size: usize,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            snippet_budget: 200,
            alphabet_size: 128,
        }
    }
}

/// Finds the best-matching excerpt of a document for a query and returns it
/// with matched words wrapped in highlight markers.
///
/// One call owns all of its state; nothing is shared across invocations, so
/// a single `Highlighter` can serve many documents in turn (or many threads
/// each holding their own).
pub struct Highlighter {
    config: HighlighterConfig,
}

impl Highlighter {
    /// Create a highlighter, rejecting unusable configuration up front.
    pub fn new(config: HighlighterConfig) -> Result<Self> {
        ensure!(config.snippet_budget > 0, "snippet budget must be positive");
        ensure!(config.alphabet_size > 0, "alphabet size must be positive");
        Ok(Self { config })
    }

    /// Create a highlighter with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: HighlighterConfig::default(),
        }
    }

    /// Extract and highlight the best snippet of `doc` for `query`.
    ///
    /// Returns `None` for an empty document. An empty query, or a query
    /// that matches nothing, yields the unhighlighted leading snippet. A
    /// query that normalizes to the whole document yields that snippet
    /// wrapped in one highlight span.
    pub fn highlight(&self, doc: &str, query: &str) -> Option<String> {
        let document = Document::new(doc)?;

        if query.is_empty() {
            return Some(self.default_snippet(&document));
        }
        if normalize(doc) == normalize(query) {
            return Some(format!(
                "{HIGHLIGHT_OPEN}{}{HIGHLIGHT_CLOSE}",
                self.default_snippet(&document)
            ));
        }

        match planner::plan(&document, query, self.config.alphabet_size) {
            Some(weights) => {
                let window = selector::select(
                    weights.as_slice(),
                    &document.word_lens,
                    self.config.snippet_budget,
                );
                Some(render(&document.words, weights.as_slice(), window))
            }
            None => Some(self.default_snippet(&document)),
        }
    }

    /// Longest prefix of the document's words fitting the budget, at least
    /// one word, unhighlighted.
    fn default_snippet(&self, document: &Document<'_>) -> String {
        let mut out = String::from(document.words[0]);
        let mut length = document.words[0].len() + 1;
        for word in document.words.iter().skip(1) {
            if length + word.len() + 1 > self.config.snippet_budget {
                break;
            }
            out.push(' ');
            out.push_str(word);
            length += word.len() + 1;
        }
        out
    }
}
