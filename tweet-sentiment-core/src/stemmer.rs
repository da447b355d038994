use rust_stemmers::{Algorithm, Stemmer as SnowballAlgorithm};

/// Reduces a lowercased word to its stem.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Snowball stemmer, English (Porter2) by default.
pub struct SnowballStemmer {
    inner: SnowballAlgorithm,
    algorithm: Algorithm,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            inner: SnowballAlgorithm::create(algorithm),
            algorithm,
        }
    }

    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Clone for SnowballStemmer {
    fn clone(&self) -> Self {
        Self::new(self.algorithm)
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}
