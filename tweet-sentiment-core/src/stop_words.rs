use {
    std::collections::HashSet,
    once_cell::sync::Lazy,
};

/// The closed English list from the Snowball project.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "would", "should", "could", "ought", "i'm", "you're", "he's",
    "she's", "it's", "we're", "they're", "i've", "you've", "we've", "they've", "i'd", "you'd",
    "he'd", "she'd", "we'd", "they'd", "i'll", "you'll", "he'll", "she'll", "we'll", "they'll",
    "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't", "didn't",
    "won't", "wouldn't", "shan't", "shouldn't", "can't", "cannot", "couldn't", "mustn't", "let's", "that's",
    "who's", "what's", "here's", "there's", "when's", "where's", "why's", "how's", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
    "at", "by", "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in", "out",
    "on", "off", "over", "under", "again", "further", "then", "once", "here", "there",
    "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same",
    "so", "than", "too", "very",
];

static ENGLISH_SET: Lazy<StopWordSet> = Lazy::new(|| StopWordSet::from_words(ENGLISH.iter().copied()));

/// Decides whether a lowercased token carries no lexical content.
pub trait StopWords: Send + Sync {
    fn is_stop_word(&self, word: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn english() -> Self {
        ENGLISH_SET.clone()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|word| word.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopWords for StopWordSet {
    fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_is_the_closed_snowball_list() {
        let stop_words = StopWordSet::english();
        assert_eq!(stop_words.len(), 174);

        for word in ["the", "is", "and", "don't", "very"] {
            assert!(stop_words.is_stop_word(word), "{} should be a stop word", word);
        }
        for word in ["nintendo", "switch", "game", "love"] {
            assert!(!stop_words.is_stop_word(word), "{} should not be a stop word", word);
        }
    }

    #[test]
    fn lookup_expects_lowercase_input() {
        let stop_words = StopWordSet::english();
        assert!(!stop_words.is_stop_word("The"));
    }

    #[test]
    fn custom_sets_are_lowercased() {
        let stop_words = StopWordSet::from_words(["Nintendo", "RT"]);
        assert!(stop_words.is_stop_word("nintendo"));
        assert!(stop_words.is_stop_word("rt"));
        assert!(!stop_words.is_stop_word("the"));
    }
}
