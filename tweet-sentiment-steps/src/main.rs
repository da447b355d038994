use {
    std::sync::Arc,
    tracing::{info, warn},
    tweet_sentiment_core::{
        config::Config,
        pipeline::Pipeline,
    },
    crate::{
        bag_of_words::run_bag_of_words_step,
        data_loading::load_corpus,
        report::Report,
        sentiment::{load_aggregator, run_sentiment_step},
        tokenization::run_tokenization_step,
        utils::init_logging,
    },
};

mod bag_of_words;
mod data_loading;
mod progress;
mod report;
mod sentiment;
mod tokenization;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_error) = match Config::read() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logging(&config.logging);

    info!("tweet sentiment analysis");
    if let Some(err) = config_error {
        warn!("{}, using defaults", err);
    }

    let sentiment_config = config.sentiment();
    let aggregator = load_aggregator(&sentiment_config)?;
    let corpus = load_corpus(&config.corpus)?;
    let report = Report::create(&config.output.directory)?;

    let max_in_flight = config.pipeline.max_in_flight();
    let tokenized = run_tokenization_step(&corpus, Arc::new(Pipeline::default()), max_in_flight).await?;

    let table = run_bag_of_words_step(tokenized.counts);
    let aggregate = table.aggregate();

    let frequent = aggregate.filtered(config.frequency.threshold);
    if frequent.is_empty() {
        warn!("no term occurs at least {} times", config.frequency.threshold);
    } else {
        info!("{} terms occur at least {} times", frequent.len(), config.frequency.threshold);
    }
    report.write_frequent_terms(&frequent)?;

    let ranked = aggregate.top(config.frequency.max_ranked_terms());
    for entry in ranked.iter().take(10) {
        info!("top term {}: {}", entry.term, entry.count);
    }
    report.write_ranked_terms(&ranked)?;

    match aggregator {
        Some(aggregator) => {
            let documents = Arc::new(tokenized.documents);
            let result = run_sentiment_step(documents, Arc::new(aggregator), max_in_flight).await?;
            report.write_category_scores(&result.scores)?;
            report.write_document_scores(&result.documents)?;
        },
        None => warn!("no sentiment lexicon configured, skipping sentiment step"),
    }

    info!("done");

    Ok(())
}
