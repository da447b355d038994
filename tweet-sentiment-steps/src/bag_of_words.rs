use {
    tracing::info,
    tweet_sentiment_core::frequency::{DocumentCounts, TermFrequencyTable},
};

pub fn run_bag_of_words_step(counts: Vec<DocumentCounts>) -> TermFrequencyTable {
    let table = TermFrequencyTable::from_counts(counts);

    info!(
        "bag of words: {} documents, {} distinct terms, {} tokens",
        table.documents(),
        table.vocabulary().len(),
        table.total_tokens(),
    );

    table
}
