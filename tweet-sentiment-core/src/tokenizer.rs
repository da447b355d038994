use {
    std::sync::Arc,
    unicode_segmentation::UnicodeSegmentation,
    crate::{
        stemmer::{Stemmer, SnowballStemmer},
        stop_words::{StopWords, StopWordSet},
    },
};

/// Splits sanitized text into Unicode words, drops numbers and symbols,
/// lowercases, removes stop words and stems what is left. Output order follows
/// the order of words in the input.
#[derive(Clone)]
pub struct Normalizer {
    stemmer: Arc<dyn Stemmer>,
    stop_words: Arc<dyn StopWords>,
}

impl Normalizer {
    pub fn new(stemmer: Arc<dyn Stemmer>, stop_words: Arc<dyn StopWords>) -> Self {
        Self {
            stemmer,
            stop_words,
        }
    }

    pub fn english() -> Self {
        Self::new(
            Arc::new(SnowballStemmer::english()),
            Arc::new(StopWordSet::english()),
        )
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        words(text)
            .filter(|word| !is_numeric(word))
            .filter(|word| !is_symbolic(word))
            .map(lowercase)
            .filter(|word| !self.stop_words.is_stop_word(word))
            .map(|word| self.stemmer.stem(&word))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

/// UAX #29 word segmentation. Hyphenated compounds come out as separate words,
/// while contractions like "don't" stay whole.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_words()
}

fn is_numeric(word: &str) -> bool {
    !word.chars().any(char::is_alphabetic) && word.chars().any(char::is_numeric)
}

fn is_symbolic(word: &str) -> bool {
    !word.chars().any(char::is_alphanumeric)
}

// Typographic apostrophes are folded so "don’t" matches the stop word "don't".
fn lowercase(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}
