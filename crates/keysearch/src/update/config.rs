use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct IndexerConfig {
    /// The directory relative document identifiers are resolved against.
    /// `None` resolves them against the current directory.
    pub documents_root: Option<PathBuf>,
    pub log_every_n: Option<usize>,
}

impl IndexerConfig {
    /// Returns the path of the file holding the given document.
    pub fn document_path(&self, document: &str) -> PathBuf {
        match &self.documents_root {
            Some(root) => root.join(document),
            None => Path::new(document).to_path_buf(),
        }
    }
}
