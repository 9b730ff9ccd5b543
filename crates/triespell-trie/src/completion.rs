// Bounded depth-first completion search
//
// The traversal keeps an explicit stack instead of recursing, and threads
// the remaining result budget through the loop: once the budget reaches zero
// no further branch is opened, siblings included.

use triespell_core::alphabet::index_letter;

use crate::node::TrieNode;

/// One level of the explicit DFS stack.
struct Frame<'a> {
    node: &'a TrieNode,
    /// Next child slot to visit at this level.
    next_slot: usize,
}

/// A single completion query: a prefix, a result cap, and the words
/// collected so far.
///
/// Results come out in alphabetical pre-order: at each node its own word
/// (if any) is emitted before any word below it, and children are visited
/// from `a` to `z`. For a given word set and `(prefix, max_results)` the
/// output is always the same.
///
/// The result buffer is owned by the query, so concurrent queries against
/// one shared tree never share state.
pub struct SuggestionQuery<'p> {
    prefix: &'p str,
    max_results: usize,
    results: Vec<String>,
}

impl<'p> SuggestionQuery<'p> {
    /// Create a query for completions of `prefix`, capped at `max_results`.
    pub fn new(prefix: &'p str, max_results: usize) -> Self {
        Self {
            prefix,
            max_results,
            results: Vec::with_capacity(max_results.min(16)),
        }
    }

    /// How many more results may be collected.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.max_results - self.results.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    fn emit(&mut self, word: &str) {
        if !self.is_full() {
            self.results.push(word.to_string());
        }
    }

    /// Enumerate the subtree under `start`, which must be the node reached
    /// by following `prefix` from the root.
    ///
    /// Returns the collected words, each of which starts with `prefix`.
    pub fn run(mut self, start: &TrieNode) -> Vec<String> {
        if self.is_full() {
            return self.results;
        }

        let mut path = String::from(self.prefix);
        if start.is_word_end() {
            self.emit(&path);
        }

        let mut stack = vec![Frame {
            node: start,
            next_slot: 0,
        }];

        while !self.is_full() {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let node = frame.node;
            match node.next_child(frame.next_slot) {
                Some((slot, child)) => {
                    frame.next_slot = slot + 1;
                    path.push(index_letter(slot));
                    if child.is_word_end() {
                        self.emit(&path);
                    }
                    stack.push(Frame {
                        node: child,
                        next_slot: 0,
                    });
                }
                None => {
                    stack.pop();
                    // The bottom frame owns no letter of its own.
                    if !stack.is_empty() {
                        path.pop();
                    }
                }
            }
        }

        self.results
    }
}
