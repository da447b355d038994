use {
    tracing::Level,
    tracing_subscriber::{
        prelude::*,
        filter::filter_fn,
    },
    tweet_sentiment_core::config::LoggingConfig,
};

pub fn init_logging(config: &LoggingConfig) {
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.level())
        .finish()
        .with(filter_fn(|metadata| {
            if metadata.target().starts_with("tweet_sentiment") {
                true
            } else {
                metadata.level() <= &Level::INFO
            }
        }))
        .init();
}
