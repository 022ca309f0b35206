use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub use self::config::IndexerConfig;
pub use self::count::{count_file_keywords, count_keywords, KeywordCounts};
pub use self::ranked::insert_last_occurrence;
use self::ranked::insert_ranked;
use crate::tokenizer::{tokens, NoiseWords};
use crate::{Error, Index, IndexStats, Occurrence, Result};

mod config;
mod count;
mod ranked;

/// Builds an [`Index`] one document at a time.
///
/// The documents are merged in the order they are given, this order
/// breaks the ties between documents with the same frequency.
#[derive(Debug)]
pub struct IndexBuilder {
    keywords: HashMap<String, Vec<Occurrence>>,
    noise_words: NoiseWords,
    stats: IndexStats,
}

impl IndexBuilder {
    pub fn new(noise_words: NoiseWords) -> IndexBuilder {
        IndexBuilder { keywords: HashMap::new(), noise_words, stats: IndexStats::default() }
    }

    /// Counts the keywords of the given lines and merges them in the index.
    pub fn index_document<'t, I>(&mut self, document: &str, lines: I)
    where
        I: IntoIterator<Item = &'t str>,
    {
        let counts = count_keywords(document, lines, &self.noise_words);
        self.merge_keywords(counts);
        self.stats.number_of_documents += 1;
    }

    /// Reads the document stored at `path` and merges its keywords in the index.
    ///
    /// The index is left untouched when the document can't be read.
    pub fn index_file(&mut self, document: &str, path: &Path) -> Result<()> {
        let counts = count_file_keywords(document, path, &self.noise_words)?;
        self.merge_keywords(counts);
        self.stats.number_of_documents += 1;
        Ok(())
    }

    /// Merges the keywords of a single document in the index.
    ///
    /// Every occurrence is inserted at its rank in the list of its keyword.
    pub fn merge_keywords(&mut self, counts: KeywordCounts) {
        for (keyword, occurrence) in counts {
            match self.keywords.entry(keyword) {
                Entry::Occupied(mut entry) => insert_ranked(entry.get_mut(), occurrence),
                Entry::Vacant(entry) => {
                    entry.insert(vec![occurrence]);
                }
            }
        }
    }

    pub(crate) fn skip_document(&mut self, document: &str) {
        self.stats.skipped_documents.push(document.to_owned());
    }

    /// Freezes the index, it can't be modified anymore.
    pub fn build(self) -> Index {
        let IndexBuilder { keywords, noise_words, mut stats } = self;
        stats.number_of_keywords = keywords.len();
        Index { keywords, noise_words, stats }
    }
}

/// Indexes all the documents listed in `documents_list`, ignoring the
/// words listed in `noise_words`.
///
/// Both files contain whitespace-delimited entries. A missing list is fatal,
/// a missing or unreadable document is logged, reported in the [`IndexStats`] and skipped.
/// A document listed more than once is only indexed the first time.
#[tracing::instrument(level = "trace", skip_all, target = "indexing::documents")]
pub fn make_index(
    documents_list: &Path,
    noise_words: &Path,
    config: &IndexerConfig,
) -> Result<Index> {
    let noise_words = match File::open(noise_words) {
        Ok(file) => NoiseWords::from_reader(BufReader::new(file))?,
        Err(source) => {
            return Err(Error::NoiseWordsNotFound { path: noise_words.to_path_buf(), source })
        }
    };
    tracing::debug!(len = noise_words.len(), "loaded the noise words");

    let file = File::open(documents_list).map_err(|source| Error::DocumentListNotFound {
        path: documents_list.to_path_buf(),
        source,
    })?;

    let mut builder = IndexBuilder::new(noise_words);
    let mut listed = HashSet::new();
    let mut seen = 0;
    for line in BufReader::new(file).lines() {
        let line = line?;
        for document in tokens(&line) {
            if !listed.insert(document.to_owned()) {
                tracing::warn!("Document `{document}` is listed more than once, ignoring it");
                continue;
            }

            seen += 1;
            let path = config.document_path(document);
            match builder.index_file(document, &path) {
                Ok(()) => tracing::debug!(document, "merged document"),
                Err(error) if error.is_recoverable() => {
                    tracing::warn!("Skipping document: {error}");
                    builder.skip_document(document);
                }
                Err(error) => return Err(error),
            }

            if config.log_every_n.is_some_and(|n| n > 0 && seen % n == 0) {
                tracing::info!("Indexed {seen} documents");
            }
        }
    }

    let index = builder.build();
    let stats = index.stats();
    tracing::info!(
        documents = stats.number_of_documents,
        skipped = stats.skipped_documents.len(),
        keywords = stats.number_of_keywords,
        "index built"
    );

    Ok(index)
}
