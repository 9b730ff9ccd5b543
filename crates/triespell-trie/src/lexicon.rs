// Lexicon: the dictionary word store

use std::fmt;

use triespell_core::alphabet::letter_index;

use crate::LexiconError;
use crate::completion::SuggestionQuery;
use crate::node::TrieNode;

/// A set of lowercase words stored as a prefix tree.
///
/// Only `a`-`z` words can be inserted; anything else is rejected with
/// [`LexiconError::InvalidCharacter`] before the tree is touched. Queries
/// accept any string: a query with a character outside the alphabet can
/// never match, so it simply answers `false` or an empty list.
#[derive(Default)]
pub struct Lexicon {
    root: TrieNode,
    len: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from a word list, failing on the first invalid word.
    pub fn from_words<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        lexicon.load_from_word_list(words)?;
        Ok(lexicon)
    }

    /// Insert a word.
    ///
    /// The caller normalizes casing first. Returns `Ok(true)` if the word is
    /// new and `Ok(false)` if it was already present; inserting twice leaves
    /// the tree unchanged.
    pub fn insert(&mut self, word: &str) -> Result<bool, LexiconError> {
        let slots = word
            .chars()
            .enumerate()
            .map(|(position, character)| {
                letter_index(character).ok_or_else(|| LexiconError::InvalidCharacter {
                    word: word.to_string(),
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut node = &mut self.root;
        for slot in slots {
            node = node.child_or_insert(slot);
        }
        let added = node.mark_word_end();
        if added {
            self.len += 1;
        }
        Ok(added)
    }

    /// Insert every word of a list.
    ///
    /// Stops at the first invalid word; words before it stay inserted.
    /// Returns the number of words that were new.
    pub fn load_from_word_list<I, S>(&mut self, words: I) -> Result<usize, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word.as_ref())? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Node reached by following `prefix` from the root.
    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(letter_index(c)?))
    }

    /// Exact membership test. O(length of word).
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_word_end)
    }

    /// Returns `true` if at least one stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Up to `limit` stored words starting with `prefix`, in alphabetical
    /// pre-order.
    ///
    /// An unreachable prefix yields an empty list.
    pub fn completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        match self.find(prefix) {
            Some(node) => SuggestionQuery::new(prefix, limit).run(node),
            None => Vec::new(),
        }
    }

    /// Every stored word, in alphabetical pre-order.
    pub fn words(&self) -> Vec<String> {
        SuggestionQuery::new("", self.len).run(&self.root)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("words", &self.len)
            .field("nodes", &self.node_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 6] = ["boy", "bay", "buoy", "car", "ace", "boat"];

    fn lexicon() -> Lexicon {
        Lexicon::from_words(WORDS).unwrap()
    }

    #[test]
    fn inserted_words_are_found() {
        let lex = lexicon();
        for w in WORDS {
            assert!(lex.contains(w), "{w}");
        }
        assert_eq!(lex.len(), 6);
    }

    #[test]
    fn prefixes_of_words_are_not_words() {
        let lex = lexicon();
        assert!(!lex.contains("bo"));
        assert!(!lex.contains("bu"));
        assert!(!lex.contains("boys"));
        assert!(!lex.contains(""));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut lex = Lexicon::new();
        assert_eq!(lex.insert("boy"), Ok(true));
        let nodes = lex.node_count();
        assert_eq!(lex.insert("boy"), Ok(false));
        assert_eq!(lex.node_count(), nodes);
        assert_eq!(lex.len(), 1);
    }

    #[test]
    fn invalid_word_leaves_tree_untouched() {
        let mut lex = Lexicon::new();
        let err = lex.insert("bo-y").unwrap_err();
        assert_eq!(
            err,
            LexiconError::InvalidCharacter {
                word: "bo-y".to_string(),
                character: '-',
                position: 2,
            }
        );
        assert_eq!(lex.node_count(), 1);
        assert!(lex.is_empty());
    }

    #[test]
    fn uppercase_is_rejected_at_insert() {
        let mut lex = Lexicon::new();
        assert!(lex.insert("Boy").is_err());
    }

    #[test]
    fn empty_word_marks_root() {
        let mut lex = Lexicon::new();
        assert_eq!(lex.insert(""), Ok(true));
        assert!(lex.contains(""));
        assert_eq!(lex.completions("", 5), [""]);
    }

    #[test]
    fn queries_with_foreign_characters_never_match() {
        let lex = lexicon();
        assert!(!lex.contains("BOY"));
        assert!(!lex.contains("b\u{00F6}y"));
        assert!(lex.completions("B", 5).is_empty());
        assert!(!lex.has_prefix("c4"));
    }

    #[test]
    fn completions_example() {
        let lex = Lexicon::from_words(["boy", "bay", "buoy", "boat"]).unwrap();
        assert_eq!(lex.completions("b", 5), ["bay", "boat", "boy", "buoy"]);
    }

    #[test]
    fn completions_respect_limit() {
        let lex = lexicon();
        assert_eq!(lex.completions("b", 2), ["bay", "boat"]);
        assert!(lex.completions("b", 0).is_empty());
    }

    #[test]
    fn completions_of_unreachable_prefix_are_empty() {
        let lex = lexicon();
        assert!(lex.completions("xyz", 5).is_empty());
        assert!(!lex.has_prefix("xyz"));
        assert!(lex.has_prefix("bu"));
    }

    #[test]
    fn completions_include_exact_prefix_word() {
        let lex = lexicon();
        assert_eq!(lex.completions("car", 5), ["car"]);
    }

    #[test]
    fn words_lists_everything_in_order() {
        assert_eq!(lexicon().words(), ["ace", "bay", "boat", "boy", "buoy", "car"]);
        assert!(Lexicon::new().words().is_empty());
    }

    #[test]
    fn load_stops_at_first_invalid_word() {
        let mut lex = Lexicon::new();
        let result = lex.load_from_word_list(["ace", "b4d", "car"]);
        assert!(result.is_err());
        assert!(lex.contains("ace"));
        assert!(!lex.contains("car"));
    }

    #[test]
    fn load_counts_new_words_only() {
        let mut lex = Lexicon::new();
        assert_eq!(lex.load_from_word_list(["a", "b", "a"]), Ok(2));
    }

    #[test]
    fn very_long_word_round_trips_and_drops() {
        let word = "a".repeat(1_000_000);
        let mut lex = Lexicon::new();
        assert_eq!(lex.insert(&word), Ok(true));
        assert!(lex.contains(&word));
        assert_eq!(lex.completions("aaaa", 1), [word.as_str()]);
        assert_eq!(format!("{lex:?}"), "Lexicon { words: 1, nodes: 1000001 }");
        drop(lex);
    }

    #[test]
    fn debug_summarizes_size() {
        let lex = Lexicon::from_words(["ab"]).unwrap();
        assert_eq!(format!("{lex:?}"), "Lexicon { words: 1, nodes: 3 }");
    }
}
