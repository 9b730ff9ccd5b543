//! Shared types for the triespell spellchecker.
//!
//! - [`alphabet`] -- the fixed 26-letter lowercase alphabet and its validation
//! - [`verdict`] -- the result of a spellcheck query

pub mod alphabet;
pub mod verdict;

pub use verdict::Verdict;
