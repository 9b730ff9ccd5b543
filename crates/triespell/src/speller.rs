// Spell checking over a loaded lexicon

use std::io::BufRead;
use std::path::Path;

use tracing::trace;
use triespell_core::Verdict;
use triespell_core::alphabet::normalize;
use triespell_trie::{Lexicon, LexiconError};

use crate::SpellError;
use crate::dictionary::{Dictionary, LoadPolicy};
use crate::suggestion::SuggestionStrategy;

/// Suggestion policy settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellOptions {
    /// Number of leading characters used as the completion prefix.
    pub prefix_len: usize,
    /// Maximum number of suggestions per misspelled word.
    pub max_suggestions: usize,
    /// How suggestions are produced.
    pub strategy: SuggestionStrategy,
}

impl Default for SpellOptions {
    /// First two characters, at most five completions.
    fn default() -> Self {
        Self {
            prefix_len: 2,
            max_suggestions: 5,
            strategy: SuggestionStrategy::Prefix,
        }
    }
}

/// Classifies words against a lexicon and proposes suggestions.
///
/// The checker owns its lexicon and holds no per-query state, so a shared
/// `&SpellChecker` can serve any number of threads.
#[derive(Debug)]
pub struct SpellChecker {
    lexicon: Lexicon,
    options: SpellOptions,
}

impl SpellChecker {
    /// Wrap an already built lexicon with the default options.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_options(lexicon, SpellOptions::default())
    }

    pub fn with_options(lexicon: Lexicon, options: SpellOptions) -> Self {
        Self { lexicon, options }
    }

    /// Build a checker from in-memory words, lowercasing each one.
    ///
    /// Fails on the first word with a character outside `a`-`z`.
    pub fn from_word_list<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lexicon = Lexicon::from_words(words.into_iter().map(|w| normalize(w.as_ref())))?;
        Ok(Self::new(lexicon))
    }

    /// Load a word-per-line dictionary stream and build a checker over it.
    pub fn from_reader<R: BufRead>(reader: R, policy: LoadPolicy) -> Result<Self, SpellError> {
        Ok(Self::new(Dictionary::from_reader(reader, policy)?.into_lexicon()))
    }

    /// Load a dictionary file and build a checker over it.
    pub fn from_path(path: impl AsRef<Path>, policy: LoadPolicy) -> Result<Self, SpellError> {
        Ok(Self::new(Dictionary::from_path(path, policy)?.into_lexicon()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn options(&self) -> &SpellOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SpellOptions) {
        self.options = options;
    }

    /// Check one word.
    ///
    /// The word is lowercased before lookup; suggestions are lowercase.
    /// Words with characters outside `a`-`z` can never be in the lexicon,
    /// so they come back as misspelled (usually without suggestions).
    pub fn check(&self, word: &str) -> Verdict {
        let word = normalize(word);
        if self.lexicon.contains(&word) {
            trace!(%word, "correct");
            Verdict::Correct
        } else {
            let suggestions = self.suggestions_for(&word);
            trace!(%word, count = suggestions.len(), "misspelled");
            Verdict::Misspelled { suggestions }
        }
    }

    /// Check a sequence of words, in order.
    pub fn check_all<I, S>(&self, words: I) -> Vec<Verdict>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().map(|w| self.check(w.as_ref())).collect()
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.lexicon.contains(&normalize(word))
    }

    /// Suggestions for `word` under the current options, whether or not the
    /// word itself is correct.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions_for(&normalize(word))
    }

    /// Completions of a partially typed word, for editor autocomplete.
    pub fn autocomplete(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.lexicon.completions(&normalize(prefix), limit)
    }

    fn suggestions_for(&self, normalized: &str) -> Vec<String> {
        self.options.strategy.generate(
            &self.lexicon,
            normalized,
            self.options.prefix_len,
            self.options.max_suggestions,
        )
    }
}
