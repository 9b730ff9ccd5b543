// Document tokenizer for batch spellchecking
//
// Splits on whitespace and strips ASCII punctuation from each token, so
// "boat," becomes "boat" and "don't" becomes "dont". Tokens that end up
// empty (a lone "--") are dropped.

/// A word taken from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Token text with punctuation removed; casing is preserved.
    pub text: String,
    /// 1-based line number.
    pub line: usize,
}

/// Iterate over the words of `text` in reading order.
pub fn tokenize(text: &str) -> impl Iterator<Item = Word> + '_ {
    text.lines().enumerate().flat_map(|(index, line)| {
        line.split_whitespace().filter_map(move |token| {
            let text = strip_punctuation(token);
            (!text.is_empty()).then_some(Word {
                text,
                line: index + 1,
            })
        })
    })
}

/// Remove every ASCII punctuation character from `token`.
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
