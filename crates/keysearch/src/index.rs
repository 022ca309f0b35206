use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::search::{Search, SearchResult};
use crate::tokenizer::{extract_keyword, NoiseWords};

/// The number of times a keyword appears in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Occurrence {
        Occurrence { document: document.into(), frequency }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub number_of_documents: usize,
    pub skipped_documents: Vec<String>,
    pub number_of_keywords: usize,
}

/// The read-only keyword index, produced by an [`IndexBuilder`](crate::IndexBuilder).
///
/// Every keyword maps to the documents it appears in, ranked by decreasing frequency.
/// Documents with the same frequency are kept in the order they were indexed.
#[derive(Debug)]
pub struct Index {
    pub(crate) keywords: HashMap<String, Vec<Occurrence>>,
    pub(crate) noise_words: NoiseWords,
    pub(crate) stats: IndexStats,
}

impl Index {
    /// Returns the ranked occurrences of the keyword found in `word`.
    ///
    /// The word is normalized first, an invalid word, a noise word
    /// or a word that is not indexed returns an empty list.
    pub fn occurrences(&self, word: &str) -> &[Occurrence] {
        extract_keyword(word, &self.noise_words)
            .and_then(|keyword| self.keywords.get(&keyword))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Returns the (at most) five best documents containing `first` or `second`.
    pub fn top5(&self, first: &str, second: &str) -> Vec<String> {
        let SearchResult { documents } = Search::new(self).keywords(first, second).execute();
        documents
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    pub fn noise_words(&self) -> &NoiseWords {
        &self.noise_words
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Iterates over the keywords and their ranked occurrences in alphabetic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        let mut keywords: Vec<_> = self.keywords.iter().collect();
        keywords.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        keywords
            .into_iter()
            .map(|(keyword, occurrences)| (keyword.as_str(), occurrences.as_slice()))
    }
}
