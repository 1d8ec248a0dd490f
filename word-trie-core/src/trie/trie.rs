use super::{
    iterators::{PreOrder, Words},
    trie_node::{TrieNode, Word},
};
use std::fmt::{Debug, Formatter};

/// A [prefix tree](https://en.wikipedia.org/wiki/Trie) of words,
/// where each edge is labeled by one character.
///
/// Every word is stored in full at its terminal node, so that the words
/// can be enumerated without rebuilding them from the path.
/// Nodes are never removed: the trie only grows.
pub struct Trie {
    root: TrieNode,
    nb_words: usize,
    nb_nodes: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie, composed only of its root.
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            nb_words: 0,
            nb_nodes: 1,
        }
    }

    /// Return the root node, which represents the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Return the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.nb_words
    }

    /// Return whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nb_words == 0
    }

    /// Return the number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.nb_nodes
    }

    /// Insert a word in the trie, creating the missing nodes of its path.
    /// Inserting an already present word does nothing.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for character in word.chars() {
            let (child, created) = node.get_or_create_child(character);
            self.nb_nodes += created as usize;
            node = child;
        }

        if node.word.is_none() {
            node.word = Some(Word::from(word));
            self.nb_words += 1;
        }
        debug_assert_eq!(node.word(), Some(word));
    }

    /// Return the node at the end of the path spelled by the word, if it exists.
    /// The node is not necessarily terminal.
    pub fn node_at(&self, word: &str) -> Option<&TrieNode> {
        word.chars()
            .try_fold(&self.root, |node, character| node.child(character))
    }

    /// Return whether the word has been inserted in the trie.
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word).map_or(false, TrieNode::is_terminal)
    }

    /// Return an iterator over all the words, in pre-order:
    /// a word comes before the words it is a prefix of,
    /// and siblings are visited by ascending character.
    pub fn words(&self) -> Words<'_> {
        Words::new(PreOrder::new(&self.root))
    }

    /// Return all the words of the trie, in pre-order.
    pub fn all_words(&self) -> Vec<&str> {
        self.words().collect()
    }

    /// Return all the words containing the given substring, in pre-order.
    ///
    /// Every word of the trie is tested, the substring does not need to be a prefix.
    /// An empty substring matches every word.
    pub fn words_containing(&self, substring: &str) -> Vec<&str> {
        self.words()
            .filter(|word| word.contains(substring))
            .collect()
    }

    /// Return all the words starting with the given prefix, in pre-order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        let nodes = match self.node_at(prefix) {
            Some(node) => PreOrder::new(node),
            None => PreOrder::empty(),
        };
        Words::new(nodes).collect()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        iter.into_iter().for_each(|word| self.insert(word.as_ref()));
    }
}

impl<S: AsRef<str>> std::iter::FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

// The trait implementations below walk the trie with a PreOrder iterator,
// derived ones would recurse once per trie level.

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("nb_words", &self.nb_words)
            .field("nb_nodes", &self.nb_nodes)
            .field("words", &self.all_words())
            .finish()
    }
}

impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        let same_node = |(a, b): (&TrieNode, &TrieNode)| {
            a.character() == b.character()
                && a.word() == b.word()
                && a.children().len() == b.children().len()
        };

        self.nb_words == other.nb_words
            && self.nb_nodes == other.nb_nodes
            && PreOrder::new(&self.root)
                .zip(PreOrder::new(&other.root))
                .all(same_node)
    }
}

impl Eq for Trie {}

// The default drop would recurse once per trie level,
// flatten the nodes instead to keep the call stack bounded.
impl Drop for Trie {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.root.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
