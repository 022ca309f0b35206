//! An in-memory keyword index over a fixed set of text documents.
//!
//! Documents are indexed once with an [`IndexBuilder`] (or [`make_index`] from files
//! on disk) and the resulting [`Index`] answers "one keyword or the other" queries,
//! returning the documents ranked by the frequency of the keywords they contain.
//!
//! ```
//! use keysearch::{IndexBuilder, NoiseWords};
//!
//! let noise_words = NoiseWords::from_text("the a of").unwrap();
//! let mut builder = IndexBuilder::new(noise_words);
//! builder.index_document("bus.txt", ["The bus, the bus and the car."]);
//! builder.index_document("car.txt", ["A car of cars: car!"]);
//! let index = builder.build();
//!
//! assert_eq!(index.top5("bus", "car"), ["bus.txt", "car.txt"]);
//! ```

mod error;
mod index;
pub mod search;
pub mod tokenizer;
pub mod update;

pub use self::error::Error;
pub use self::index::{Index, IndexStats, Occurrence};
pub use self::search::{Search, SearchResult, DEFAULT_SEARCH_LIMIT};
pub use self::tokenizer::{extract_keyword, NoiseWords};
pub use self::update::{make_index, IndexBuilder, IndexerConfig};

pub type Result<T> = std::result::Result<T, error::Error>;
