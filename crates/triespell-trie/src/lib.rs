//! Prefix tree (trie) over the 26-letter lowercase alphabet.
//!
//! # Architecture
//!
//! - [`node`] -- one prefix position with its owned children
//! - [`completion`] -- bounded depth-first completion search
//! - [`lexicon`] -- the word store answering membership and completion queries
//!
//! The tree is built once (bulk load) and read many times. A built
//! [`Lexicon`] is plain owned data, so it can be shared read-only across
//! threads; every query owns its own result buffer.

pub mod completion;
pub mod lexicon;
pub mod node;

pub use completion::SuggestionQuery;
pub use lexicon::Lexicon;
pub use node::TrieNode;

/// Error type for lexicon construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    /// The word contains a symbol outside `a`-`z`.
    ///
    /// `position` counts characters, not bytes.
    #[error("invalid character {character:?} at position {position} in word {word:?}")]
    InvalidCharacter {
        word: String,
        character: char,
        position: usize,
    },
}
