use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Documents list `{}` not found: {source}", .path.display())]
    DocumentListNotFound { path: PathBuf, source: io::Error },
    #[error("Noise words file `{}` not found: {source}", .path.display())]
    NoiseWordsNotFound { path: PathBuf, source: io::Error },
    #[error("Document `{document}` not found at `{}`: {source}", .path.display())]
    DocumentNotFound { document: String, path: PathBuf, source: io::Error },
    #[error("Document `{document}` could not be read from `{}`: {source}", .path.display())]
    DocumentUnreadable { document: String, path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Could not build the noise words set: {0}")]
    Fst(#[from] fst::Error),
}

impl Error {
    /// Whether the indexing can go on after this error.
    ///
    /// Only the errors tied to a single document are recoverable, the document is skipped.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::DocumentNotFound { .. } | Error::DocumentUnreadable { .. })
    }
}
