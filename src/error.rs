use snafu::Snafu;
use std::{
    fmt::{Debug, Display, Formatter},
    path::PathBuf,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Snafu)]
#[snafu(visibility(pub(crate)))] // Make creatable enum variants crate-visible
pub enum Error {
    #[snafu(display("Error while loading word list {}: {}", path.display(), source))]
    LoadWords {
        path: PathBuf,
        source: word_trie_core::Error,
    },
    #[snafu(display("Error while reading the standard input stream: {}", source))]
    Stdin { source: std::io::Error },
    #[snafu(display("Error while writing the result: {}", source))]
    Output { source: word_trie_core::Error },
    #[snafu(display("Error while writing in the standard output stream: {}", source))]
    OutputWrite { source: std::io::Error },
    #[snafu(display("Error while formatting the result to JSON: {}", source))]
    JsonFormat { source: serde_json::Error },
    #[snafu(display("Error while parsing the command '{}': {}", line, cause))]
    CommandParse { line: String, cause: String },
}

// Link Error to Display to print the message when an error is returned from main.
// (taken from snafu issues, may be implemented in snafu in the future)
impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
