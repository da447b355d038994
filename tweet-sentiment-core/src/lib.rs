pub mod config;
pub mod corpus;
pub mod frequency;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod sanitizer;
pub mod sentiment;
pub mod stemmer;
pub mod stop_words;
pub mod tokenizer;
