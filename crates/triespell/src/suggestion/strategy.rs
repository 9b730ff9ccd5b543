// Suggestion strategies: prefix completion and edit-distance ranking

use std::fmt;
use std::str::FromStr;

use triespell_trie::Lexicon;

use super::distance::levenshtein;

/// Policy for turning a misspelled (already lowercased) word into
/// suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionStrategy {
    /// Complete the word's first `prefix_len` characters from the lexicon.
    ///
    /// Words shorter than `prefix_len` use the whole word as the prefix.
    #[default]
    Prefix,
    /// Rank every lexicon word by edit distance to the word; ties are
    /// broken alphabetically.
    EditDistance,
}

impl SuggestionStrategy {
    /// Produce at most `max_suggestions` candidates for `word`.
    pub fn generate(
        self,
        lexicon: &Lexicon,
        word: &str,
        prefix_len: usize,
        max_suggestions: usize,
    ) -> Vec<String> {
        match self {
            SuggestionStrategy::Prefix => {
                lexicon.completions(leading_chars(word, prefix_len), max_suggestions)
            }
            SuggestionStrategy::EditDistance => closest_words(lexicon, word, max_suggestions),
        }
    }
}

/// The first `count` characters of `word` (the whole word if shorter).
pub fn leading_chars(word: &str, count: usize) -> &str {
    match word.char_indices().nth(count) {
        Some((end, _)) => &word[..end],
        None => word,
    }
}

fn closest_words(lexicon: &Lexicon, word: &str, max_suggestions: usize) -> Vec<String> {
    if max_suggestions == 0 {
        return Vec::new();
    }
    // `words()` is alphabetical, and the sort is stable.
    let mut ranked: Vec<(usize, String)> = lexicon
        .words()
        .into_iter()
        .map(|candidate| (levenshtein(word, &candidate), candidate))
        .collect();
    ranked.sort_by_key(|&(distance, _)| distance);
    ranked
        .into_iter()
        .take(max_suggestions)
        .map(|(_, candidate)| candidate)
        .collect()
}

impl fmt::Display for SuggestionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SuggestionStrategy::Prefix => "prefix",
            SuggestionStrategy::EditDistance => "edit-distance",
        })
    }
}

impl FromStr for SuggestionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefix" => Ok(SuggestionStrategy::Prefix),
            "edit-distance" => Ok(SuggestionStrategy::EditDistance),
            other => Err(format!(
                "unknown suggestion strategy {other:?} (expected \"prefix\" or \"edit-distance\")"
            )),
        }
    }
}
