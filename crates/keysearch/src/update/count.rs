use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::tokenizer::{extract_keyword, tokens, NoiseWords};
use crate::{Error, Occurrence, Result};

/// The keywords of a single document with their number of appearances.
pub type KeywordCounts = BTreeMap<String, Occurrence>;

/// Counts the keywords found in the lines of a document.
pub fn count_keywords<'t, I>(document: &str, lines: I, noise_words: &NoiseWords) -> KeywordCounts
where
    I: IntoIterator<Item = &'t str>,
{
    let mut counts = KeywordCounts::new();
    for line in lines {
        count_line(document, line, noise_words, &mut counts);
    }
    counts
}

/// Counts the keywords of the document stored at `path`.
///
/// Lines that are not valid UTF-8 are read lossily. Returns a [`Error::DocumentNotFound`]
/// if the file can't be opened and a [`Error::DocumentUnreadable`] if reading it fails.
#[tracing::instrument(level = "trace", skip(path, noise_words), target = "indexing::count")]
pub fn count_file_keywords(
    document: &str,
    path: &Path,
    noise_words: &NoiseWords,
) -> Result<KeywordCounts> {
    let file = File::open(path).map_err(|source| Error::DocumentNotFound {
        document: document.to_owned(),
        path: path.to_path_buf(),
        source,
    })?;

    let unreadable = |source| Error::DocumentUnreadable {
        document: document.to_owned(),
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(file);
    let mut counts = KeywordCounts::new();
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer).map_err(unreadable)? == 0 {
            break;
        }
        count_line(document, &String::from_utf8_lossy(&buffer), noise_words, &mut counts);
    }
    Ok(counts)
}

fn count_line(document: &str, line: &str, noise_words: &NoiseWords, counts: &mut KeywordCounts) {
    for token in tokens(line) {
        if let Some(keyword) = extract_keyword(token, noise_words) {
            counts
                .entry(keyword)
                .and_modify(|occurrence| occurrence.frequency += 1)
                .or_insert_with(|| Occurrence::new(document, 1));
        }
    }
}
