use smartstring::{LazyCompact, SmartString};
use std::fmt::{Debug, Formatter};

/// The string type used to store the words at their terminal node.
/// Most words are short enough to be stored inline, without a heap allocation.
pub type Word = SmartString<LazyCompact>;

/// A node of a [Trie](crate::Trie).
///
/// A node owns its children, which are kept sorted by character
/// so that they can be binary searched and enumerated in a deterministic order.
#[derive(Default)]
pub struct TrieNode {
    /// The character of the edge leading to this node.
    /// Not meaningful for the root, which represents the empty prefix.
    pub(super) character: char,

    /// The complete word ending at this node.
    /// If None, the node only exists as a path to longer words.
    pub(super) word: Option<Word>,

    /// The children of the node, sorted by character.
    pub(super) children: Vec<TrieNode>,
}

impl TrieNode {
    /// Create a node without word nor children.
    pub(super) fn new(character: char) -> Self {
        Self {
            character,
            word: None,
            children: Vec::new(),
        }
    }

    /// Return the character of the edge leading to this node.
    pub fn character(&self) -> char {
        self.character
    }

    /// Return the word stored at this node, if a word ends here.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Return whether an inserted word ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// Return the children of the node, sorted by character.
    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    /// Return the child reached through the given character.
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children
            .binary_search_by(|child| child.character.cmp(&character))
            .ok()
            .map(|index| &self.children[index])
    }

    /// Return the child reached through the given character,
    /// creating it at its sorted position if it does not exist yet.
    ///
    /// The boolean is true when the child has been created.
    pub(super) fn get_or_create_child(&mut self, character: char) -> (&mut TrieNode, bool) {
        match self
            .children
            .binary_search_by(|child| child.character.cmp(&character))
        {
            Ok(index) => (&mut self.children[index], false),
            Err(index) => {
                self.children.insert(index, TrieNode::new(character));
                (&mut self.children[index], true)
            }
        }
    }
}

// Only list the children characters: a derived implementation
// would recurse once per trie level.
impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("character", &self.character)
            .field("word", &self.word())
            .field(
                "children",
                &self.children.iter().map(|c| c.character).collect::<Vec<_>>(),
            )
            .finish()
    }
}
