// Suggestion generation for misspelled words
//
//   - `strategy`: which policy turns a misspelled word into candidates
//   - `distance`: Levenshtein distance used by the edit-distance policy

pub mod distance;
pub mod strategy;

pub use distance::levenshtein;
pub use strategy::SuggestionStrategy;
