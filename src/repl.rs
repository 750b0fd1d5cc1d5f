//! Interactive prompt loop over any `BufRead`/`Write` pair.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::hash_table::KeyHasher;
use crate::spellcheck::{SpellChecker, SuggestedCorrection};

/// Longest token kept from one read; the rest of an overlong token is discarded.
pub const MAX_TOKEN_LEN: usize = 255;

pub const PROMPT: &str = "Enter a word or \"quit\" to quit: ";

/// Reads the next whitespace-delimited token, keeping at most `max_len` bytes.
///
/// Returns `None` at end of input.
pub fn read_token<R: BufRead>(reader: &mut R, max_len: usize) -> Result<Option<String>> {
    let mut token = Vec::new();
    let mut started = false;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &b in buf {
            used += 1;
            if b.is_ascii_whitespace() {
                if started {
                    done = true;
                    break;
                }
            } else {
                started = true;
                if token.len() < max_len {
                    token.push(b);
                }
            }
        }
        reader.consume(used);
        if done {
            break;
        }
    }

    if !started {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

/// ASCII-only lower-casing; other bytes pass through.
pub fn fold_case(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// Runs the prompt loop until `quit` or end of input.
pub fn run<H, R, W>(checker: &SpellChecker<H>, mut input: R, mut output: W) -> Result<()>
where
    H: KeyHasher + Sync,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(token) = read_token(&mut input, MAX_TOKEN_LEN)? else {
            writeln!(output)?;
            break;
        };
        let word = fold_case(&token);
        if word == "quit" {
            break;
        }

        match checker.suggest_single_word_corrections(&word) {
            SuggestedCorrection::Correct => {
                writeln!(output, "The word \"{}\" is spelled correctly.", word)?;
            }
            SuggestedCorrection::Suggestions(list) => {
                writeln!(output, "The word \"{}\" is spelled incorrectly.", word)?;
                writeln!(
                    output,
                    "Did you mean any of the following words? Please choose by typing again."
                )?;
                for (n, suggestion) in list.iter().enumerate() {
                    writeln!(output, "Word {}: {}", n + 1, suggestion.word)?;
                }
            }
        }
    }
    Ok(())
}
