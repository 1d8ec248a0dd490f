use crate::{error::*, Trie};
use snafu::ResultExt;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::debug;

/// Insert in the trie every word of a text file, containing one word per line.
///
/// The line terminators are not part of the words, and blank lines are skipped.
/// Any other character, including inner spaces, is kept as is.
///
/// Return the number of lines that have been inserted.
/// If reading the file fails partway through, the words read before the error
/// are kept in the trie.
pub fn load_words(path: &Path, trie: &mut Trie) -> Result<usize> {
    let file = File::open(path).context(FileOpen { path })?;
    let mut reader = BufReader::new(file);

    let nb_words_before = trie.len();
    let mut nb_lines = 0;
    let mut line = String::new();
    loop {
        line.clear();
        let nb_bytes = reader.read_line(&mut line).context(FileRead { path })?;
        if nb_bytes == 0 {
            break; // EOF reached
        }

        let word = line.trim_end_matches(&['\r', '\n'][..]);
        if word.trim().is_empty() {
            continue;
        }

        trie.insert(word);
        nb_lines += 1;
    }

    debug!(
        path = %path.display(),
        lines = nb_lines,
        new_words = trie.len() - nb_words_before,
        "word list loaded"
    );

    Ok(nb_lines)
}
