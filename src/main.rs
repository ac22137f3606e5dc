mod document;
mod highlighter;
mod output;
mod query;
mod snippet;
mod utils;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use highlighter::{Highlighter, HighlighterConfig};

#[derive(Parser)]
#[command(name = "snipx")]
#[command(about = "Query-aware snippet extraction and highlighting")]
struct Cli {
    /// Search query; wrap words in double quotes to match them as a phrase
    query: String,

    /// Document file to excerpt (reads stdin when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum snippet length in characters
    #[arg(long, default_value_t = 200)]
    budget: usize,

    /// Emit the result as JSON with highlight markers left in place
    #[arg(long)]
    json: bool,

    /// Print raw highlight markers instead of terminal colors
    #[arg(long)]
    raw: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let doc = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let config = HighlighterConfig {
        snippet_budget: cli.budget,
        ..Default::default()
    };
    let highlighter = Highlighter::new(config)?;

    match highlighter.highlight(&doc, &cli.query) {
        Some(snippet) if cli.json => output::print_json(&snippet)?,
        Some(snippet) if cli.raw => println!("{}", snippet),
        Some(snippet) => output::print_snippet(&snippet, !cli.no_color)?,
        None => bail!("document is empty"),
    }

    Ok(())
}
