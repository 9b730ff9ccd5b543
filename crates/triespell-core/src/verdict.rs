// Spellcheck verdict shared by the checker and its front ends

use serde::Serialize;

/// Classification of a single spellcheck query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    /// The lowercased word is in the dictionary.
    Correct,
    /// The word is not in the dictionary.
    ///
    /// `suggestions` may be empty when nothing in the dictionary resembles
    /// the word; that is not an error.
    Misspelled { suggestions: Vec<String> },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Suggestions carried by the verdict (always empty for `Correct`).
    pub fn suggestions(&self) -> &[String] {
        match self {
            Verdict::Correct => &[],
            Verdict::Misspelled { suggestions } => suggestions,
        }
    }
}
