//! # snipx - Query-Aware Snippet Highlighter
//!
//! snipx finds the best-matching excerpt of a document for a user query and
//! returns that excerpt with the matched words wrapped in highlight markers.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`document`] - per-invocation document representation and the offset
//!   to word-index mapping
//! - [`query`] - Boyer-Moore matching, query planning, weight accumulation
//! - [`snippet`] - budget-bounded window selection and span rendering
//! - [`output`] - terminal/JSON rendering of a marked-up snippet
//! - [`utils`] - normalization, stop-word and duplicate filtering
//!
//! ## Quick Start
//!
//! ```
//! use snipx::Highlighter;
//!
//! let highlighter = Highlighter::with_defaults();
//! let snippet = highlighter
//!     .highlight("toast toaster toad", "toaster")
//!     .unwrap();
//! assert_eq!(snippet, "toast [[HIGHLIGHT]]toaster[[ENDHIGHLIGHT]] toad");
//! ```
//!
//! ## Pipeline
//!
//! One invocation flows planner -> matcher -> weights -> selector ->
//! renderer. A quoted phrase, or the whole query matched exactly as typed,
//! scores double per covered word; individual term hits score single, with
//! partial-word matches ("auto" inside "automobile") credited to the whole
//! word. The snippet is the contiguous word window with the highest summed
//! weight that fits the character budget.

pub mod document;
pub mod highlighter;
pub mod output;
pub mod query;
pub mod snippet;
pub mod utils;

pub use highlighter::{Highlighter, HighlighterConfig};
pub use snippet::render::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
