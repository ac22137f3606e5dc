//! Highlight span rendering.
//!
//! Walks the selected window once and wraps each contiguous run of
//! positively-weighted words in a single span, so adjacent matches never
//! produce a closing marker followed immediately by an opening one.

use crate::snippet::selector::SnippetWindow;

/// Opening marker for a highlighted run.
pub const HIGHLIGHT_OPEN: &str = "[[HIGHLIGHT]]";
/// Closing marker for a highlighted run.
pub const HIGHLIGHT_CLOSE: &str = "[[ENDHIGHLIGHT]]";

/// Render the chosen window from the original words.
///
/// Spans open on a zero-to-positive weight transition and close on the
/// reverse one, with the closing marker kept flush against the last
/// highlighted word. A span still open at the window's end is closed there.
/// Output whitespace is collapsed to single spaces and trimmed.
pub fn render(words: &[&str], weights: &[u32], window: SnippetWindow) -> String {
    let mut out = String::new();
    let mut in_span = false;

    for i in window.start..=window.end {
        if weights[i] > 0 {
            out.push(' ');
            if !in_span {
                out.push_str(HIGHLIGHT_OPEN);
                in_span = true;
            }
            out.push_str(words[i]);
        } else {
            if in_span {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push_str(HIGHLIGHT_CLOSE);
                in_span = false;
            }
            out.push(' ');
            out.push_str(words[i]);
        }
    }
    if in_span {
        out.push_str(HIGHLIGHT_CLOSE);
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
