use std::io::{stdout, BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use keysearch::{
    extract_keyword, make_index, Index, IndexerConfig, Occurrence, DEFAULT_SEARCH_LIMIT,
};
use serde::Serialize;

mod logs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The file listing the documents to index, separated by whitespaces.
    #[arg(long, env = "KEYSEARCH_DOCUMENTS", default_value = "docs.txt")]
    documents: PathBuf,

    /// The file listing the noise words, separated by whitespaces.
    #[arg(long, env = "KEYSEARCH_NOISE_WORDS", default_value = "noisewords.txt")]
    noise_words: PathBuf,

    /// The directory the documents are resolved against.
    ///
    /// Defaults to the current directory.
    #[arg(long, env = "KEYSEARCH_DOCUMENTS_ROOT")]
    documents_root: Option<PathBuf>,

    /// Log a progress message every N indexed documents.
    #[arg(long)]
    log_every_n: Option<usize>,

    /// The log filter, e.g. `info` or `keysearch=debug`.
    #[arg(long, default_value = "info")]
    log_filter: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Outputs the documents containing one keyword or the other,
    /// ranked by the frequency of the keywords.
    Search {
        first: String,
        second: String,

        /// The maximum number of documents to return.
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Output the result in JSON.
        #[arg(long)]
        json: bool,
    },

    /// Outputs every keyword with its ranked occurrences.
    DumpIndex {
        /// Output the index in JSON.
        #[arg(long)]
        json: bool,
    },

    /// Outputs the keyword of a raw token, nothing if the token isn't a keyword.
    ///
    /// The noise words are taken into account.
    Keyword { token: String },
}

#[derive(Serialize)]
struct KeywordEntry<'a> {
    keyword: &'a str,
    occurrences: &'a [Occurrence],
}

fn main() -> anyhow::Result<()> {
    let Cli { documents, noise_words, documents_root, log_every_n, log_filter, command } =
        Cli::parse();

    logs::setup_logs(&log_filter)?;

    let config = IndexerConfig { documents_root, log_every_n };
    let index = make_index(&documents, &noise_words, &config).with_context(|| {
        format!("while indexing the documents listed in `{}`", documents.display())
    })?;

    match command {
        Command::Search { first, second, limit, json } => {
            search(&index, first, second, limit, json)
        }
        Command::DumpIndex { json } => dump_index(&index, json),
        Command::Keyword { token } => {
            if let Some(keyword) = extract_keyword(&token, index.noise_words()) {
                println!("{keyword}");
            }
            Ok(())
        }
    }
}

fn search(
    index: &Index,
    first: String,
    second: String,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let result = index.search().keywords(first, second).limit(limit).execute();

    let mut out = BufWriter::new(stdout().lock());
    if json {
        serde_json::to_writer(&mut out, &result.documents)?;
        writeln!(out)?;
    } else {
        for document in &result.documents {
            writeln!(out, "{document}")?;
        }
    }
    out.flush()?;

    Ok(())
}

fn dump_index(index: &Index, json: bool) -> anyhow::Result<()> {
    let mut out = BufWriter::new(stdout().lock());
    for (keyword, occurrences) in index.iter() {
        if json {
            serde_json::to_writer(&mut out, &KeywordEntry { keyword, occurrences })?;
            writeln!(out)?;
        } else {
            let occurrences: Vec<_> = occurrences.iter().map(ToString::to_string).collect();
            writeln!(out, "{keyword}: {}", occurrences.join(" "))?;
        }
    }
    out.flush()?;

    Ok(())
}
