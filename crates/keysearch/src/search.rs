use std::fmt;

use crate::{Index, Occurrence};

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// A search for the documents containing one keyword or the other.
pub struct Search<'a> {
    first: Option<String>,
    second: Option<String>,
    limit: usize,
    index: &'a Index,
}

impl<'a> Search<'a> {
    pub fn new(index: &'a Index) -> Search<'a> {
        Search { first: None, second: None, limit: DEFAULT_SEARCH_LIMIT, index }
    }

    pub fn keywords(
        &mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> &mut Search<'a> {
        self.first = Some(first.into());
        self.second = Some(second.into());
        self
    }

    pub fn first(&mut self, keyword: impl Into<String>) -> &mut Search<'a> {
        self.first = Some(keyword.into());
        self
    }

    pub fn second(&mut self, keyword: impl Into<String>) -> &mut Search<'a> {
        self.second = Some(keyword.into());
        self
    }

    pub fn limit(&mut self, limit: usize) -> &mut Search<'a> {
        self.limit = limit;
        self
    }

    /// Returns the documents ranked by the frequency of the keyword they contain.
    ///
    /// When both keywords appear with the same frequency the document of the
    /// first keyword comes first. A document is returned only once.
    pub fn execute(&self) -> SearchResult {
        let first = self.first.as_deref().map_or(&[][..], |kw| self.index.occurrences(kw));
        let second = self.second.as_deref().map_or(&[][..], |kw| self.index.occurrences(kw));
        let documents = merge_ranked(first, second, self.limit);
        tracing::trace!(target: "search", search = ?self, ?documents, "executed search");
        SearchResult { documents }
    }
}

impl fmt::Debug for Search<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Search { first, second, limit, index: _ } = self;
        f.debug_struct("Search")
            .field("first", first)
            .field("second", second)
            .field("limit", limit)
            .finish()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub documents: Vec<String>,
}

/// Walks both ranked lists like the merge step of a merge sort and collects
/// the documents until `limit` distinct ones are found or both lists are exhausted.
fn merge_ranked(first: &[Occurrence], second: &[Occurrence], limit: usize) -> Vec<String> {
    let mut documents = Vec::with_capacity(limit.min(first.len() + second.len()));
    let push = |documents: &mut Vec<String>, occurrence: &Occurrence| {
        if documents.len() < limit && !documents.contains(&occurrence.document) {
            documents.push(occurrence.document.clone());
        }
    };

    let (mut i, mut j) = (0, 0);
    while documents.len() < limit {
        match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) if a.frequency > b.frequency => {
                push(&mut documents, a);
                i += 1;
            }
            (Some(a), Some(b)) if a.frequency < b.frequency => {
                push(&mut documents, b);
                j += 1;
            }
            (Some(a), Some(b)) => {
                push(&mut documents, a);
                push(&mut documents, b);
                i += 1;
                j += 1;
            }
            (Some(a), None) => {
                push(&mut documents, a);
                i += 1;
            }
            (None, Some(b)) => {
                push(&mut documents, b);
                j += 1;
            }
            (None, None) => break,
        }
    }

    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::NoiseWords;
    use crate::IndexBuilder;

    fn occurrences(list: &[(&str, u32)]) -> Vec<Occurrence> {
        list.iter().map(|&(doc, freq)| Occurrence::new(doc, freq)).collect()
    }

    #[test]
    fn tie_favors_the_first_keyword() {
        let bus = occurrences(&[("A", 5), ("B", 2)]);
        let car = occurrences(&[("C", 5), ("D", 1)]);
        insta::assert_debug_snapshot!(merge_ranked(&bus, &car, 5), @r###"
        [
            "A",
            "C",
            "B",
            "D",
        ]
        "###);
    }

    #[test]
    fn stops_at_the_limit() {
        let first = occurrences(&[("a", 9), ("b", 7), ("c", 5), ("d", 3)]);
        let second = occurrences(&[("e", 8), ("f", 6), ("g", 4), ("h", 2)]);
        insta::assert_debug_snapshot!(merge_ranked(&first, &second, 5), @r###"
        [
            "a",
            "e",
            "b",
            "f",
            "c",
        ]
        "###);
        assert_eq!(merge_ranked(&first, &second, 0), Vec::<String>::new());
    }

    #[test]
    fn limit_reached_in_the_middle_of_a_tie() {
        let first = occurrences(&[("a", 4), ("b", 3), ("c", 2), ("x", 1)]);
        let second = occurrences(&[("d", 4), ("e", 3), ("y", 1)]);
        insta::assert_debug_snapshot!(merge_ranked(&first, &second, 5), @r###"
        [
            "a",
            "d",
            "b",
            "e",
            "c",
        ]
        "###);
    }

    #[test]
    fn shared_documents_appear_once() {
        let first = occurrences(&[("a", 5), ("b", 3), ("c", 1)]);
        let second = occurrences(&[("b", 5), ("a", 2), ("d", 2)]);
        insta::assert_debug_snapshot!(merge_ranked(&first, &second, 5), @r###"
        [
            "a",
            "b",
            "d",
            "c",
        ]
        "###);
    }

    #[test]
    fn drains_the_longest_list() {
        let first = occurrences(&[("a", 10)]);
        let second = occurrences(&[("b", 9), ("c", 8), ("a", 7), ("d", 6), ("e", 5), ("f", 4)]);
        insta::assert_debug_snapshot!(merge_ranked(&first, &second, 5), @r###"
        [
            "a",
            "b",
            "c",
            "d",
            "e",
        ]
        "###);

        insta::assert_debug_snapshot!(merge_ranked(&second, &first, 5), @r###"
        [
            "a",
            "b",
            "c",
            "d",
            "e",
        ]
        "###);
    }

    #[test]
    fn both_lists_exhausted_together() {
        let first = occurrences(&[("a", 3), ("b", 1)]);
        let second = occurrences(&[("c", 3), ("d", 1)]);
        insta::assert_debug_snapshot!(merge_ranked(&first, &second, 5), @r###"
        [
            "a",
            "c",
            "b",
            "d",
        ]
        "###);
    }

    #[test]
    fn a_single_list() {
        let first = occurrences(&[("a", 7), ("b", 6), ("c", 5), ("d", 4), ("e", 3), ("f", 2)]);
        insta::assert_debug_snapshot!(merge_ranked(&first, &[], 5), @r###"
        [
            "a",
            "b",
            "c",
            "d",
            "e",
        ]
        "###);
        insta::assert_debug_snapshot!(merge_ranked(&[], &first[..2], 5), @r###"
        [
            "a",
            "b",
        ]
        "###);
        assert!(merge_ranked(&[], &[], 5).is_empty());
    }

    #[test]
    fn search_builder() {
        let mut builder = IndexBuilder::new(NoiseWords::from_text("the").unwrap());
        builder.index_document("d1", ["red red red blue"]);
        builder.index_document("d2", ["blue blue red"]);
        builder.index_document("d3", ["green"]);
        let index = builder.build();

        let SearchResult { documents } = Search::new(&index).keywords("Red", "blue!").execute();
        assert_eq!(documents, ["d1", "d2"]);

        let SearchResult { documents } =
            Search::new(&index).keywords("blue", "red").limit(1).execute();
        assert_eq!(documents, ["d1"]);

        let SearchResult { documents } = index.search().first("green").execute();
        assert_eq!(documents, ["d3"]);

        let SearchResult { documents } = index.search().second("the").execute();
        assert!(documents.is_empty());
    }
}
