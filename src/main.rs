//! The application binary of the word-trie project.
//!
//! Load words from word list files and from the command line into a
//! [Trie](word_trie_core::Trie), then listen for queries in
//! [the standard input stream](std::io::stdin), one per line:
//! - `add <WORD>`: insert a word
//! - `find <WORD>`: print whether the word has been inserted
//! - `contains <SUBSTRING>`: print the words containing the substring as a JSON array
//! - `prefix <PREFIX>`: print the words starting with the prefix as a JSON array
//! - `print`: print all the words, one per line
//! - `count`: print the number of words
//!
//! See the [word-trie-core](../word_trie_core/index.html) crate for
//! documentation about the trie itself.

use clap::Parser;
use error::*;
use snafu::ResultExt;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_trie_core::{load_words, write_words, Trie};

mod error;
mod query;

/// The words inserted by the `--demo` flag.
const DEMO_WORDS: [&str; 3] = ["isaia", "isaias", "isaiat"];

/// Represents the expected parsed program arguments.
#[derive(Debug, Parser)]
#[command(name = "word-trie", version, about = "Store words in a trie and query them")]
struct Args {
    /// Word list files to load, containing one word per line
    #[arg(value_name = "WORD_FILE")]
    word_files: Vec<PathBuf>,

    /// Insert a word before reading the queries (can be repeated)
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// Insert the sample words isaia, isaias and isaiat
    #[arg(long)]
    demo: bool,

    /// Print all the words and exit without reading the queries
    #[arg(long)]
    print: bool,
}

/// Install the logger in the standard error stream.
/// The verbosity is read from the `RUST_LOG` environment variable (`warn` by default).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Create the trie from the word sources given in the arguments.
fn build_trie(args: &Args) -> Result<Trie> {
    let mut trie = Trie::new();

    for path in &args.word_files {
        load_words(path, &mut trie).context(LoadWords { path })?;
    }
    trie.extend(&args.words);
    if args.demo {
        trie.extend(DEMO_WORDS.iter());
    }

    info!(words = trie.len(), nodes = trie.node_count(), "trie built");
    Ok(trie)
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut trie = build_trie(&args)?;

    if args.print {
        let stdout = std::io::stdout();
        return write_words(&trie, &mut stdout.lock()).context(Output);
    }

    query::process_stdin_queries(&mut trie)
}
