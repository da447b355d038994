use {
    std::{sync::Arc, collections::VecDeque},
    anyhow::Result,
    indicatif::ProgressBar,
    tracing::info,
    tweet_sentiment_core::{
        corpus::Corpus,
        frequency::DocumentCounts,
        models::Document,
        pipeline::Pipeline,
    },
};

pub struct TokenizedCorpus {
    pub documents: Vec<Document>,
    pub counts: Vec<DocumentCounts>,
}

/// Sanitizes and normalizes every post on the blocking pool. Results come back
/// in corpus order together with each document's term counts.
pub async fn run_tokenization_step(corpus: &Corpus, pipeline: Arc<Pipeline>, max_in_flight: usize) -> Result<TokenizedCorpus> {
    info!("normalizing {} posts", corpus.len());

    let pb = ProgressBar::new(corpus.len() as u64);

    let mut documents = Vec::with_capacity(corpus.len());
    let mut counts = Vec::with_capacity(corpus.len());
    let mut join_handles = VecDeque::new();

    for post in corpus.posts().iter().cloned() {
        let pipeline = pipeline.clone();
        join_handles.push_back(tokio::task::spawn_blocking(move || {
            let document = pipeline.process(post);
            let document_counts = DocumentCounts::from_tokens(document.tokens());
            (document, document_counts)
        }));

        while join_handles.len() >= max_in_flight {
            if let Some(handle) = join_handles.pop_front() {
                let (document, document_counts) = handle.await?;
                documents.push(document);
                counts.push(document_counts);
                pb.inc(1);
            }
        }
    }

    while let Some(handle) = join_handles.pop_front() {
        let (document, document_counts) = handle.await?;
        documents.push(document);
        counts.push(document_counts);
        pb.inc(1);
    }

    pb.finish();

    let empty = documents.iter().filter(|document| document.is_empty()).count();
    info!("normalized {} documents, {} of them without any tokens", documents.len(), empty);

    Ok(TokenizedCorpus {
        documents,
        counts,
    })
}
