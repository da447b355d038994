use {
    std::{borrow::Cow, collections::BTreeMap, fmt, str::FromStr, sync::Arc},
    serde::{Serialize, Deserialize},
    thiserror::Error,
};

/// The ten affect categories of the word-emotion association lexicon.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Negative,
    Positive,
    Sadness,
    Surprise,
    Trust,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Anger,
        Category::Anticipation,
        Category::Disgust,
        Category::Fear,
        Category::Joy,
        Category::Negative,
        Category::Positive,
        Category::Sadness,
        Category::Surprise,
        Category::Trust,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Anger => "anger",
            Category::Anticipation => "anticipation",
            Category::Disgust => "disgust",
            Category::Fear => "fear",
            Category::Joy => "joy",
            Category::Negative => "negative",
            Category::Positive => "positive",
            Category::Sadness => "sadness",
            Category::Surprise => "surprise",
            Category::Trust => "trust",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sentiment category \"{0}\"")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Category::ALL.iter()
            .copied()
            .find(|category| category.label() == label)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Lexicon matches per category for one piece of text. Categories without
/// matches are absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryCounts(BTreeMap<Category, u32>);

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: Category, count: u32) {
        *self.0.entry(category).or_insert(0) += count;
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(category, count)| (*category, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scores text against an affect lexicon. A word may count towards several
/// categories at once.
pub trait CategoryScorer: Send + Sync {
    fn score(&self, text: &str) -> CategoryCounts;
}

/// Corpus totals per category. Empty until at least one document has been
/// added; from then on every category is present, zero or not.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryScores(BTreeMap<Category, u64>);

impl CategoryScores {
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a CategoryCounts>,
    {
        let mut scores = Self::default();
        for counts in documents {
            scores.add(counts);
        }
        scores
    }

    pub fn add(&mut self, counts: &CategoryCounts) {
        if self.0.is_empty() {
            self.0 = Category::ALL.iter().map(|category| (*category, 0)).collect();
        }

        for (category, count) in counts.iter() {
            *self.0.entry(category).or_insert(0) += count as u64;
        }
    }

    pub fn get(&self, category: Category) -> Option<u64> {
        self.0.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        self.0.iter().map(|(category, count)| (*category, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Runs a scorer over documents after a light encoding cleanup. Performs no
/// stemming or stop-word removal; tokenization is up to the scorer.
#[derive(Clone)]
pub struct SentimentAggregator {
    scorer: Arc<dyn CategoryScorer>,
    ascii_only: bool,
}

impl SentimentAggregator {
    pub fn new(scorer: Arc<dyn CategoryScorer>, ascii_only: bool) -> Self {
        Self {
            scorer,
            ascii_only,
        }
    }

    pub fn score_document(&self, text: &str) -> CategoryCounts {
        self.scorer.score(&normalize_encoding(text, self.ascii_only))
    }

    pub fn score_corpus<'a, I>(&self, texts: I) -> (Vec<CategoryCounts>, CategoryScores)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let documents: Vec<CategoryCounts> = texts.into_iter()
            .map(|text| self.score_document(text))
            .collect();
        let scores = CategoryScores::from_documents(&documents);
        (documents, scores)
    }
}

/// Drops replacement characters left by lossy decoding and control characters.
/// With `ascii_only`, non-ASCII letters and digits are dropped as well, while
/// other non-ASCII characters (dashes, quotes, emoji) become a space so the
/// words around them stay apart.
pub fn normalize_encoding(text: &str, ascii_only: bool) -> Cow<'_, str> {
    let clean = |c: char| -> Option<char> {
        if c == char::REPLACEMENT_CHARACTER || (c.is_control() && !c.is_whitespace()) {
            None
        } else if !ascii_only || c.is_ascii() {
            Some(c)
        } else if c.is_alphanumeric() {
            None
        } else {
            Some(' ')
        }
    };

    if text.chars().all(|c| clean(c) == Some(c)) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter_map(clean).collect())
    }
}
