//! Loading word lists into a [`HashTable`].
//!
//! A word is a maximal run of ASCII letters, digits and apostrophes; any
//! other byte separates words. Words are stored as they appear, without case
//! folding, each with the value 1.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::error::{HashSpellError, Result};
use crate::hash_table::{HashTable, KeyHasher};

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\''
}

/// Splits `text` into dictionary words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

/// Reads words from `reader` into `table`, returning how many words were read
/// (duplicates included).
pub fn load_dictionary<R: BufRead, H: KeyHasher>(
    reader: R,
    table: &mut HashTable<H>,
) -> Result<usize> {
    let mut count = 0;
    // newlines always separate words, so line-at-a-time reading never splits one
    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        for word in words(&line) {
            table.put(word, 1)?;
            count += 1;
        }
    }
    Ok(count)
}

/// Opens the word list at `path` and loads it into `table`.
pub fn load_dictionary_file<P: AsRef<Path>, H: KeyHasher>(
    path: P,
    table: &mut HashTable<H>,
) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| HashSpellError::dictionary(path, e))?;

    let start = Instant::now();
    let count = load_dictionary(BufReader::new(file), table).map_err(|e| match e {
        HashSpellError::Io(source) => HashSpellError::dictionary(path, source),
        other => other,
    })?;

    log::info!(
        "Dictionary {} loaded in {:?}: {} words, {} distinct",
        path.display(),
        start.elapsed(),
        count,
        table.size()
    );
    Ok(count)
}
