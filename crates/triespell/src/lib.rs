//! Trie-based spellchecker.
//!
//! A [`Lexicon`](triespell_trie::Lexicon) is loaded once from a word-per-line
//! dictionary; a [`SpellChecker`] then classifies words and proposes
//! completions of their first letters as suggestions.
//!
//! - [`dictionary`] -- dictionary loading and validation policy
//! - [`speller`] -- the checker and its options
//! - [`suggestion`] -- suggestion strategies (prefix completion, edit distance)
//! - [`tokenizer`] -- splitting a document into checkable words
//! - [`report`] -- batch checking and the suggestions file format

use std::io;
use std::path::PathBuf;

pub mod dictionary;
pub mod report;
pub mod speller;
pub mod suggestion;
pub mod tokenizer;

pub use dictionary::{Dictionary, LoadPolicy, LoadStats};
pub use report::{Finding, SpellReport};
pub use speller::{SpellChecker, SpellOptions};
pub use suggestion::SuggestionStrategy;
pub use triespell_core::Verdict;
pub use triespell_trie::{Lexicon, LexiconError};

/// Error type for building a checker and writing reports.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// The dictionary file is missing or unreadable.
    #[error("dictionary source unavailable: {}: {source}", path.display())]
    DictionarySourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A dictionary word contains a symbol outside `a`-`z`.
    #[error(transparent)]
    InvalidCharacter(#[from] LexiconError),

    /// Reading a dictionary stream or writing a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
