use anyhow::Result;
use book_similarity::config::{DEFAULT_DOCUMENTS, DEFAULT_TOP_PAIRS, DEFAULT_TOP_WORDS};
use book_similarity::{analyze, report, Config, StopWords};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Compare books by their most frequent words.
///
/// Prints a similarity matrix and the most similar pairs. Files that
/// cannot be read are reported on stderr and compare as empty.
#[derive(Parser)]
#[command(name = "book-similarity", version, about)]
struct Cli {
    /// Documents to compare (.txt, .pdf or .epub; anything else is read as text)
    #[arg(default_values_t = DEFAULT_DOCUMENTS.map(String::from))]
    documents: Vec<String>,

    /// Most frequent words kept per document
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_WORDS)]
    top_words: usize,

    /// Most similar pairs to list
    #[arg(short = 'p', long, default_value_t = DEFAULT_TOP_PAIRS)]
    top_pairs: usize,

    /// Word to ignore; repeat to build the list (replaces the default A, AND, AN, OF, IN, THE)
    #[arg(short = 's', long = "stop-word", value_name = "WORD")]
    stop_words: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also list each document's N top words
    #[arg(long, value_name = "N")]
    show_words: Option<usize>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        let stop_words = if self.stop_words.is_empty() {
            StopWords::default()
        } else {
            StopWords::new(&self.stop_words)
        };
        Config {
            documents: self.documents.iter().map(PathBuf::from).collect(),
            top_words: self.top_words,
            top_pairs: self.top_pairs,
            stop_words,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let analysis = analyze(&cli.config());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        writeln!(out, "{}", report::to_json(&analysis)?)?;
    } else {
        report::write_text(&analysis, &mut out)?;
        if let Some(count) = cli.show_words {
            report::write_top_words(&analysis, count, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
