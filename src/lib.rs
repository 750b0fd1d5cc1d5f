//! A string-keyed chaining hash table and the dictionary spell checker built on it.

pub mod dictionary;
pub mod error;
pub mod hash_table;
pub mod repl;
pub mod spellcheck;

pub use error::{HashSpellError, Result};
pub use hash_table::{CharSum, HashTable, KeyHasher, PositionWeighted, TableStats};
pub use spellcheck::{
    SpellChecker, SuggestedCorrection, Suggestion, SuggestionConfig, levenshtein, rank, suggest,
};
