use {
    std::collections::HashMap,
    serde::{Serialize, Deserialize},
    crate::models::Document,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

/// Term counts for a single document, kept in first-occurrence order.
/// These are the partial results that get combined into a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCounts {
    terms: Vec<(String, u32)>,
}

impl DocumentCounts {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut terms: Vec<(String, u32)> = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            match positions.get(token) {
                Some(&position) => terms[position].1 += 1,
                None => {
                    positions.insert(token, terms.len());
                    terms.push((token.to_owned(), 1));
                },
            }
        }

        Self { terms }
    }

    pub fn get(&self, term: &str) -> u32 {
        self.terms.iter()
            .find(|(t, _)| t == term)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.terms.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.terms.iter().map(|(_, count)| *count as u64).sum()
    }
}

/// Distinct terms of the corpus in discovery order: by document, then by
/// position within the document.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    fn intern(&mut self, term: &str) -> usize {
        if let Some(&id) = self.index.get(term) {
            return id;
        }

        let id = self.terms.len();
        self.terms.push(term.to_owned());
        self.index.insert(term.to_owned(), id);
        id
    }

    pub fn id(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn term(&self, id: usize) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Document-term count matrix, stored sparsely per document.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyTable {
    vocabulary: Vocabulary,
    rows: Vec<HashMap<usize, u32>>,
    totals: Vec<u64>,
}

impl TermFrequencyTable {
    pub fn from_documents(documents: &[Document]) -> Self {
        Self::from_counts(documents.iter().map(|document| DocumentCounts::from_tokens(document.tokens())))
    }

    /// Combines per-document partial counts. Documents keep the order in which
    /// they are yielded, and so does term discovery.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = DocumentCounts>,
    {
        let mut table = Self::default();

        for document in counts {
            let mut row = HashMap::with_capacity(document.len());

            for (term, count) in document.iter() {
                let id = table.vocabulary.intern(term);
                if id == table.totals.len() {
                    table.totals.push(0);
                }

                table.totals[id] += count as u64;
                *row.entry(id).or_insert(0) += count;
            }

            table.rows.push(row);
        }

        table
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn documents(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Occurrences of `term` in document `document`; zero for unknown terms or documents.
    pub fn count(&self, document: usize, term: &str) -> u32 {
        let id = match self.vocabulary.id(term) {
            Some(id) => id,
            None => return 0,
        };

        self.rows.get(document)
            .and_then(|row| row.get(&id))
            .copied()
            .unwrap_or(0)
    }

    /// Terms present in a document with their counts, in vocabulary order.
    pub fn document_terms(&self, document: usize) -> Vec<TermCount> {
        let row = match self.rows.get(document) {
            Some(row) => row,
            None => return Vec::new(),
        };

        let mut ids: Vec<usize> = row.keys().copied().collect();
        ids.sort_unstable();

        ids.into_iter()
            .filter_map(|id| {
                let term = self.vocabulary.term(id)?;
                Some(TermCount {
                    term: term.to_owned(),
                    count: row[&id] as u64,
                })
            })
            .collect()
    }

    pub fn total_tokens(&self) -> u64 {
        self.totals.iter().sum()
    }

    pub fn aggregate(&self) -> AggregateFrequency {
        AggregateFrequency {
            entries: self.vocabulary.iter()
                .zip(self.totals.iter())
                .map(|(term, count)| TermCount {
                    term: term.to_owned(),
                    count: *count,
                })
                .collect(),
        }
    }
}

/// Corpus-wide count per term, in discovery order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AggregateFrequency {
    entries: Vec<TermCount>,
}

impl AggregateFrequency {
    pub fn get(&self, term: &str) -> Option<u64> {
        self.entries.iter()
            .find(|entry| entry.term == term)
            .map(|entry| entry.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Terms whose count is at least `threshold`, in discovery order.
    pub fn filtered(&self, threshold: u64) -> Vec<TermCount> {
        self.entries.iter()
            .filter(|entry| entry.count >= threshold)
            .cloned()
            .collect()
    }

    /// All terms by descending count. Equal counts keep discovery order.
    pub fn ranked(&self) -> Vec<TermCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    pub fn top(&self, limit: Option<usize>) -> Vec<TermCount> {
        let mut ranked = self.ranked();
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    fn table(documents: &[&str]) -> TermFrequencyTable {
        TermFrequencyTable::from_counts(documents.iter().map(|document| DocumentCounts::from_tokens(&tokens(document))))
    }

    #[test]
    fn document_counts_keep_first_occurrence_order() {
        let counts = DocumentCounts::from_tokens(&["mario", "zelda", "mario", "kart", "zelda", "mario"]);

        let entries: Vec<(&str, u32)> = counts.iter().collect();
        assert_eq!(entries, vec![("mario", 3), ("zelda", 2), ("kart", 1)]);
        assert_eq!(counts.get("kart"), 1);
        assert_eq!(counts.get("sonic"), 0);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn table_counts_match_token_sequences() {
        let table = table(&["switch game game", "game mario", "mario mario switch zelda"]);

        assert_eq!(table.documents(), 3);
        assert_eq!(table.count(0, "game"), 2);
        assert_eq!(table.count(0, "switch"), 1);
        assert_eq!(table.count(0, "mario"), 0);
        assert_eq!(table.count(1, "game"), 1);
        assert_eq!(table.count(2, "mario"), 2);
        assert_eq!(table.count(2, "zelda"), 1);
        assert_eq!(table.count(3, "zelda"), 0);
        assert_eq!(table.count(0, "sonic"), 0);
        assert_eq!(table.total_tokens(), 9);
    }

    #[test]
    fn aggregate_is_the_sum_over_documents() {
        let table = table(&["switch game game", "game mario", "mario mario switch zelda"]);
        let aggregate = table.aggregate();

        for term in table.vocabulary().iter() {
            let sum: u64 = (0..table.documents()).map(|document| table.count(document, term) as u64).sum();
            assert_eq!(aggregate.get(term), Some(sum), "term {}", term);
        }

        assert_eq!(aggregate.get("game"), Some(3));
        assert_eq!(aggregate.get("mario"), Some(3));
        assert_eq!(aggregate.get("switch"), Some(2));
        assert_eq!(aggregate.get("zelda"), Some(1));
    }

    #[test]
    fn vocabulary_follows_discovery_order() {
        let table = table(&["switch game game", "game mario", "mario zelda"]);
        let terms: Vec<&str> = table.vocabulary().iter().collect();
        assert_eq!(terms, vec!["switch", "game", "mario", "zelda"]);
    }

    #[test]
    fn document_terms_list_a_single_row() {
        let table = table(&["switch game game", "game mario"]);
        assert_eq!(table.document_terms(1), vec![
            TermCount { term: "game".to_owned(), count: 1 },
            TermCount { term: "mario".to_owned(), count: 1 },
        ]);
        assert!(table.document_terms(5).is_empty());
    }

    #[test]
    fn filtered_view_applies_threshold_inclusively() {
        let mut documents = vec!["nintendo"; 45];
        documents.extend(["x x x", "switch"]);
        let aggregate = table(&documents).aggregate();

        let filtered = aggregate.filtered(40);
        assert_eq!(filtered, vec![TermCount { term: "nintendo".to_owned(), count: 45 }]);

        assert_eq!(aggregate.filtered(3).len(), 2);
        assert!(aggregate.filtered(46).is_empty());
    }

    #[test]
    fn ranked_view_is_non_increasing_with_stable_ties() {
        let aggregate = table(&["b c", "a b a c b", "a a a d b b"]).aggregate();
        let ranked = aggregate.ranked();

        let order: Vec<(&str, u64)> = ranked.iter().map(|entry| (entry.term.as_str(), entry.count)).collect();
        assert_eq!(order, vec![("b", 5), ("a", 5), ("c", 2), ("d", 1)]);
        assert!(ranked.windows(2).all(|pair| pair[0].count >= pair[1].count));
    }

    #[test]
    fn top_truncates_ranked_view() {
        let aggregate = table(&["a a a b b c"]).aggregate();
        let top: Vec<String> = aggregate.top(Some(2)).into_iter().map(|entry| entry.term).collect();
        assert_eq!(top, vec!["a", "b"]);
        assert_eq!(aggregate.top(None).len(), 3);
    }

    #[test]
    fn empty_documents_produce_empty_rows() {
        let table = table(&["", "mario", ""]);
        assert_eq!(table.documents(), 3);
        assert!(table.document_terms(0).is_empty());
        assert_eq!(table.aggregate().len(), 1);
    }

    #[test]
    fn empty_corpus_produces_empty_views() {
        let table = TermFrequencyTable::from_documents(&[]);

        assert!(table.is_empty());
        assert!(table.vocabulary().is_empty());
        assert!(table.aggregate().is_empty());
        assert!(table.aggregate().filtered(0).is_empty());
        assert!(table.aggregate().ranked().is_empty());
    }

    #[test]
    fn aggregate_serializes_as_a_list_of_pairs() {
        let aggregate = table(&["mario mario zelda"]).aggregate();
        let json = serde_json::to_string(&aggregate).unwrap();
        assert_eq!(json, r#"[{"term":"mario","count":2},{"term":"zelda","count":1}]"#);
    }
}
