use {
    std::{sync::Arc, collections::VecDeque},
    anyhow::{Context, Result},
    tracing::info,
    tweet_sentiment_core::{
        config::SentimentConfig,
        lexicon::Lexicon,
        models::Document,
        sentiment::{CategoryCounts, CategoryScores, SentimentAggregator},
    },
    crate::progress::Progress,
};

pub struct SentimentResult {
    pub documents: Vec<CategoryCounts>,
    pub scores: CategoryScores,
}

pub fn load_aggregator(config: &SentimentConfig) -> Result<Option<SentimentAggregator>> {
    let path = match config.lexicon_path() {
        Some(path) => path,
        None => return Ok(None),
    };

    let lexicon = Lexicon::load(path)
        .with_context(|| format!("failed to load sentiment lexicon from {}", path.display()))?;

    Ok(Some(SentimentAggregator::new(Arc::new(lexicon), config.ascii_only)))
}

pub async fn run_sentiment_step(documents: Arc<Vec<Document>>, aggregator: Arc<SentimentAggregator>, max_in_flight: usize) -> Result<SentimentResult> {
    let mut progress = Progress::new("scoring documents".to_owned(), documents.len());

    let mut per_document = Vec::with_capacity(documents.len());
    let mut join_handles = VecDeque::new();

    for index in 0..documents.len() {
        let documents = documents.clone();
        let aggregator = aggregator.clone();
        join_handles.push_back(tokio::task::spawn_blocking(move || {
            aggregator.score_document(documents[index].sanitized())
        }));

        while join_handles.len() >= max_in_flight {
            if let Some(handle) = join_handles.pop_front() {
                per_document.push(handle.await?);
                progress.update();
            }
        }
    }

    while let Some(handle) = join_handles.pop_front() {
        per_document.push(handle.await?);
        progress.update();
    }

    progress.finish();

    let scores = CategoryScores::from_documents(&per_document);
    for (category, score) in scores.iter() {
        info!("{}: {}", category, score);
    }

    Ok(SentimentResult {
        documents: per_document,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        tweet_sentiment_core::{
            pipeline::Pipeline,
            corpus::Corpus,
            sentiment::Category,
        },
    };

    fn aggregator() -> Arc<SentimentAggregator> {
        let lexicon = Lexicon::from_entries(vec![
            ("happy", &[Category::Joy, Category::Positive][..]),
            ("scared", &[Category::Fear, Category::Negative][..]),
        ]);
        Arc::new(SentimentAggregator::new(Arc::new(lexicon), true))
    }

    #[tokio::test]
    async fn sums_document_scores() {
        let corpus = Corpus::from_texts(["I am happy but scared", "#happy so happy", ""]);
        let documents = Arc::new(Pipeline::default().process_corpus(&corpus));

        let result = run_sentiment_step(documents, aggregator(), 2).await.unwrap();

        assert_eq!(result.documents.len(), 3);
        assert_eq!(result.documents[0].get(Category::Fear), 1);
        assert_eq!(result.documents[1].get(Category::Joy), 1);
        assert_eq!(result.scores.get(Category::Joy), Some(2));
        assert_eq!(result.scores.get(Category::Negative), Some(1));
        assert_eq!(result.scores.get(Category::Trust), Some(0));
    }

    #[tokio::test]
    async fn empty_corpus_has_empty_scores() {
        let result = run_sentiment_step(Arc::new(Vec::new()), aggregator(), 4).await.unwrap();
        assert!(result.documents.is_empty());
        assert!(result.scores.is_empty());
    }

    #[test]
    fn missing_lexicon_path_disables_scoring() {
        assert!(load_aggregator(&SentimentConfig::default()).unwrap().is_none());
    }
}
