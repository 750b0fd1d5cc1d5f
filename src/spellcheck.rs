use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dictionary::load_dictionary_file;
use crate::error::Result;
use crate::hash_table::{CharSum, HashTable, KeyHasher};

/// Initial bucket count for tables loaded from a word list.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Full-matrix Levenshtein distance over bytes. Unit cost for insertion,
/// deletion and substitution; case-sensitive.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let cols = b.len() + 1;
    let mut matrix = vec![0usize; (a.len() + 1) * cols];

    for i in 0..=a.len() {
        matrix[i * cols] = i;
    }
    for j in 0..=b.len() {
        matrix[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let diag = matrix[(i - 1) * cols + j - 1];
            matrix[i * cols + j] = if a[i - 1] == b[j - 1] {
                diag
            } else {
                let del = matrix[(i - 1) * cols + j];
                let ins = matrix[i * cols + j - 1];
                1 + del.min(ins).min(diag)
            };
        }
    }
    matrix[a.len() * cols + b.len()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Highest edit distance considered; tiers run 1..=max_tiers.
    pub max_tiers: usize,
    pub max_results: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_tiers: 3,
            max_results: 5,
        }
    }
}

/// Every key of `table` with its distance to `query`, nearest first.
///
/// Equal distances keep table iteration order (bucket index, then chain
/// position), not alphabetical order.
pub fn rank<H: KeyHasher>(query: &str, table: &HashTable<H>) -> Vec<Suggestion> {
    let keys: Vec<&str> = table.keys().collect();
    let mut ranked: Vec<Suggestion> = keys
        .par_iter()
        .map(|&word| Suggestion {
            word: word.to_string(),
            distance: levenshtein(query, word),
        })
        .collect();
    // stable, so ties stay in iteration order
    ranked.sort_by_key(|s| s.distance);
    ranked
}

/// Up to `max_results` words at distance 1, then 2, up to `max_tiers`.
///
/// Distances are computed once per key into a transient list; the table is
/// only read. Within a tier words appear in table iteration order.
pub fn suggest<H: KeyHasher>(
    query: &str,
    table: &HashTable<H>,
    max_tiers: usize,
    max_results: usize,
) -> Vec<Suggestion> {
    if max_tiers == 0 || max_results == 0 {
        return Vec::new();
    }

    let keys: Vec<&str> = table.keys().collect();
    // None for keys that cannot fall in any tier
    let distances: Vec<Option<usize>> = keys
        .par_iter()
        .map(|word| {
            if word.len().abs_diff(query.len()) > max_tiers {
                return None;
            }
            Some(levenshtein(query, word)).filter(|d| (1..=max_tiers).contains(d))
        })
        .collect();

    let mut results = Vec::new();
    for tier in 1..=max_tiers {
        for (word, distance) in keys.iter().zip(&distances) {
            if results.len() == max_results {
                return results;
            }
            if *distance == Some(tier) {
                results.push(Suggestion {
                    word: word.to_string(),
                    distance: tier,
                });
            }
        }
        log::trace!("tier {} done, {} suggestions for {:?}", tier, results.len(), query);
    }
    results
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestedCorrection {
    /// The word is in the dictionary.
    Correct,
    /// The word is unknown; holds the nearest words, possibly none.
    Suggestions(Vec<Suggestion>),
}

/// A dictionary table plus the suggestion settings used against it.
#[derive(Debug, Clone)]
pub struct SpellChecker<H: KeyHasher = CharSum> {
    dictionary: HashTable<H>,
    config: SuggestionConfig,
}

impl SpellChecker<CharSum> {
    pub fn from_word_list_file<P: AsRef<Path>>(path: P, config: SuggestionConfig) -> Result<Self> {
        let mut dictionary = HashTable::new(DEFAULT_CAPACITY)?;
        load_dictionary_file(path, &mut dictionary)?;
        log::debug!(
            "dictionary table stats: {}",
            serde_json::to_string(&dictionary.stats())?
        );
        Ok(Self::new(dictionary, config))
    }
}

impl<H: KeyHasher + Sync> SpellChecker<H> {
    pub fn new(dictionary: HashTable<H>, config: SuggestionConfig) -> Self {
        SpellChecker { dictionary, config }
    }

    pub fn dictionary(&self) -> &HashTable<H> {
        &self.dictionary
    }

    pub fn config(&self) -> SuggestionConfig {
        self.config
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains_key(word)
    }

    pub fn add_word_to_dictionary(&mut self, word: &str) -> Result<()> {
        self.dictionary.put(word, 1)
    }

    pub fn suggest_single_word_corrections(&self, word: &str) -> SuggestedCorrection {
        if self.is_correct(word) {
            return SuggestedCorrection::Correct;
        }
        SuggestedCorrection::Suggestions(suggest(
            word,
            &self.dictionary,
            self.config.max_tiers,
            self.config.max_results,
        ))
    }

    pub fn suggest_word_corrections(&self, words: &[String]) -> Vec<SuggestedCorrection> {
        words
            .par_iter()
            .map(|word| self.suggest_single_word_corrections(word))
            .collect()
    }
}
