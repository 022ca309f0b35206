use std::collections::BTreeSet;
use std::fmt;
use std::io::BufRead;

use crate::Result;

/// The characters allowed to trail a keyword.
pub const PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// The set of words that are never indexed nor searched.
///
/// Words are stored lowercased, the membership test is therefore case insensitive
/// as long as the tested word is lowercased too.
pub struct NoiseWords {
    set: fst::Set<Vec<u8>>,
}

impl NoiseWords {
    pub fn empty() -> NoiseWords {
        NoiseWords { set: fst::Set::default() }
    }

    /// Builds the set from whitespace-delimited words.
    pub fn from_text(text: &str) -> Result<NoiseWords> {
        NoiseWords::from_words(tokens(text))
    }

    /// Builds the set from a reader of whitespace-delimited words, line by line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<NoiseWords> {
        let mut words = BTreeSet::new();
        for line in reader.lines() {
            let line = line?;
            words.extend(tokens(&line).map(str::to_lowercase));
        }
        Ok(NoiseWords { set: fst::Set::from_iter(words)? })
    }

    pub fn from_words<'a, I>(words: I) -> Result<NoiseWords>
    where
        I: IntoIterator<Item = &'a str>,
    {
        // the fst requires its keys to be sorted and deduplicated
        let words: BTreeSet<_> = words.into_iter().map(str::to_lowercase).collect();
        Ok(NoiseWords { set: fst::Set::from_iter(words)? })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl Default for NoiseWords {
    fn default() -> NoiseWords {
        NoiseWords::empty()
    }
}

impl fmt::Debug for NoiseWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseWords").field("len", &self.len()).finish()
    }
}

/// Splits a line into its whitespace-delimited tokens.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Returns the keyword hidden in a raw token, if any.
///
/// A keyword is the token stripped of its trailing punctuation, made only of ASCII
/// letters, lowercased and not a noise word. The first character following the
/// letters must be one of the [`PUNCTUATION`] characters and no letter can appear
/// after it, `end.of` and `3.0` are therefore not keywords.
pub fn extract_keyword(token: &str, noise_words: &NoiseWords) -> Option<String> {
    let end = token.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(token.len());
    let (word, trailing) = token.split_at(end);

    if word.is_empty() {
        return None;
    }

    if let Some(first) = trailing.chars().next() {
        if !PUNCTUATION.contains(&first) || trailing.contains(|c: char| c.is_ascii_alphabetic())
        {
            return None;
        }
    }

    let word = word.to_ascii_lowercase();
    if noise_words.contains(&word) {
        None
    } else {
        Some(word)
    }
}
