// Trie node: one prefix position and the children it owns

use std::fmt;

use triespell_core::alphabet::{ALPHABET_SIZE, index_letter};

/// One prefix position in the tree.
///
/// Children are stored in a fixed array indexed by letter offset
/// (`'a'` is slot 0). Each node owns its children exclusively, so the
/// whole tree is freed by dropping the root.
///
/// Tree depth equals the longest word, so dropping and formatting never
/// recurse into children.
#[derive(Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    is_word_end: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the path from the root to this node spells a word.
    #[inline]
    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    /// Mark this node as a word end. Returns `true` if it was not one before.
    pub fn mark_word_end(&mut self) -> bool {
        !std::mem::replace(&mut self.is_word_end, true)
    }

    /// Child at the given letter slot, if any.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&TrieNode> {
        self.children.get(index)?.as_deref()
    }

    /// Child at the given letter slot, created on first use.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ALPHABET_SIZE`.
    pub fn child_or_insert(&mut self, index: usize) -> &mut TrieNode {
        self.children[index].get_or_insert_with(Box::default)
    }

    /// First child whose slot is `>= from`, in ascending letter order.
    pub fn next_child(&self, from: usize) -> Option<(usize, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(i, c)| c.as_deref().map(|node| (i, node)))
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter().filter_map(|c| c.as_deref()));
        }
        count
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl fmt::Debug for TrieNode {
    /// Shows this node's flag and child letters only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self
            .children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .map(|(i, _)| index_letter(i))
            .collect();
        f.debug_struct("TrieNode")
            .field("is_word_end", &self.is_word_end)
            .field("children", &letters)
            .finish()
    }
}
