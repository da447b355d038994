use {
    anyhow::{Context, Result},
    tracing::info,
    tweet_sentiment_core::{
        config::CorpusConfig,
        corpus::Corpus,
    },
};

pub fn load_corpus(config: &CorpusConfig) -> Result<Corpus> {
    let corpus = Corpus::load(config)
        .with_context(|| format!("failed to load corpus from {}", config.path.display()))?;

    let blank = corpus.posts().iter().filter(|post| post.text.trim().is_empty()).count();
    info!("loaded {} posts ({} with no text)", corpus.len(), blank);

    Ok(corpus)
}
