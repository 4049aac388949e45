//! Dictionary of playable words.
//!
//! Words are stored uppercase; lookups are case-insensitive. Loading from a
//! word file drops entries with apostrophes and entries shorter than three
//! letters, while building from a list keeps every word.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Shortest word accepted from a word file.
pub const MIN_WORD_LEN: usize = 3;

/// An immutable set of uppercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary from a list of words without filtering.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_uppercase())
                .collect(),
        }
    }

    /// Loads a word file (one word per line).
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads one word per line, keeping only well-formed entries.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_uppercase();
            if word.contains('\'') || word.chars().count() < MIN_WORD_LEN {
                continue;
            }
            words.insert(word);
        }
        Ok(Dictionary { words })
    }

    /// True if the dictionary holds `word`, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over all words (uppercase, arbitrary order).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
