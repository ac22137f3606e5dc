//! Output formatting for highlighted snippets.

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::snippet::render::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};

/// Snippet result as emitted in JSON mode, markers left in place.
#[derive(Debug, Serialize)]
pub struct SnippetOutput<'a> {
    pub snippet: &'a str,
    /// Whether the snippet contains at least one highlight span.
    pub highlighted: bool,
}

/// Print the snippet with highlight spans rendered as terminal colors.
pub fn print_snippet(snippet: &str, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let mut rest = snippet;
    while let Some(open) = rest.find(HIGHLIGHT_OPEN) {
        write!(stdout, "{}", &rest[..open])?;
        rest = &rest[open + HIGHLIGHT_OPEN.len()..];

        let close = rest.find(HIGHLIGHT_CLOSE).unwrap_or(rest.len());
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", &rest[..close])?;
        stdout.reset()?;
        rest = &rest[(close + HIGHLIGHT_CLOSE.len()).min(rest.len())..];
    }
    writeln!(stdout, "{}", rest)?;

    Ok(())
}

/// Print the snippet as a single JSON object.
pub fn print_json(snippet: &str) -> io::Result<()> {
    let output = SnippetOutput {
        snippet,
        highlighted: snippet.contains(HIGHLIGHT_OPEN),
    };
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &output)?;
    writeln!(stdout)?;
    Ok(())
}
