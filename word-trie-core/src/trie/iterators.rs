//! Pre-order traversals of a trie.
//!
//! The traversals are linearised with an explicit stack instead of recursion,
//! so that their memory usage on the call stack does not depend on the trie depth.

use super::trie_node::TrieNode;

/// An iterator over the nodes of a (sub)trie in pre-order:
/// a node is visited before its children, and children are visited by ascending character.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> PreOrder<'a> {
    /// Create a traversal starting at the given node (included).
    pub fn new(start: &'a TrieNode) -> Self {
        Self { stack: vec![start] }
    }

    /// Create a traversal which yields nothing.
    pub fn empty() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Push the children in reverse order to pop them in the correct order in the future
        self.stack.extend(node.children().iter().rev());

        Some(node)
    }
}

/// An iterator over the words stored in a (sub)trie, in pre-order.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    nodes: PreOrder<'a>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(nodes: PreOrder<'a>) -> Self {
        Self { nodes }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.by_ref().find_map(TrieNode::word)
    }
}
