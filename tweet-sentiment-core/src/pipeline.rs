use crate::{
    corpus::Corpus,
    models::{Document, Post},
    sanitizer::Sanitizer,
    tokenizer::Normalizer,
};

/// Sanitize then normalize. Each post is handled independently, so callers are
/// free to run `process` for many posts in parallel.
#[derive(Clone, Default)]
pub struct Pipeline {
    sanitizer: Sanitizer,
    normalizer: Normalizer,
}

impl Pipeline {
    pub fn new(sanitizer: Sanitizer, normalizer: Normalizer) -> Self {
        Self {
            sanitizer,
            normalizer,
        }
    }

    pub fn process(&self, post: Post) -> Document {
        let sanitized = self.sanitizer.sanitize(&post.text);
        let tokens = self.normalizer.normalize(&sanitized);
        post.sanitized(sanitized).tokenized(tokens)
    }

    pub fn process_corpus(&self, corpus: &Corpus) -> Vec<Document> {
        corpus.posts()
            .iter()
            .cloned()
            .map(|post| self.process(post))
            .collect()
    }
}
