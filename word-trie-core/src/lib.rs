//! The core library of the word-trie project.
//!
//! Define the [Trie](crate::Trie) data structure, along with helpers
//! to fill it from a word list file and to dump its content.

mod error;
mod printer;
mod trie;
mod word_file;

pub use error::{Error, Result};
pub use printer::{write_word_list, write_words};
pub use trie::{
    iterators::{PreOrder, Words},
    trie::Trie,
    trie_node::{TrieNode, Word},
};
pub use word_file::load_words;
