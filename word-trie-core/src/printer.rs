use crate::{error::*, Trie};
use snafu::ResultExt;
use std::io::Write;

/// Write the words in the output stream, one word per line, in the given order.
pub fn write_word_list<W: Write>(words: &[&str], output: &mut W) -> Result<()> {
    for word in words {
        writeln!(output, "{}", word).context(WriteOutput)?;
    }
    output.flush().context(WriteOutput)
}

/// Write every word of the trie in the output stream, one word per line, in pre-order.
pub fn write_words<W: Write>(trie: &Trie, output: &mut W) -> Result<()> {
    write_word_list(&trie.all_words(), output)
}
