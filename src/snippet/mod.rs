pub mod render;
pub mod selector;

pub use render::{render, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use selector::{select, SnippetWindow};
