//! Utility functions shared across the pipeline.
//!
//! ## Modules
//!
//! - [`normalize`] - punctuation/case/whitespace cleanup, with a
//!   phrase-preserving variant
//! - [`filter`] - stop-word removal and order-preserving deduplication

pub mod filter;
pub mod normalize;

pub use filter::*;
pub use normalize::*;
